//! `QueryExecutor` backed by a borrowed rusqlite connection.
//!
//! # Invariants
//! - Statement text is logged at debug level; parameter values never are.
//! - Rows are copied into owned `ResultRow`s before mapping, so mappers never
//!   see rusqlite's borrowed row type.

use super::{PersistenceResult, QueryExecutor, ResultRow, RowMapper, StoreResult, Value};
use log::debug;
use rusqlite::{params_from_iter, Connection, Row};

/// SQLite-backed executor.
pub struct SqliteExecutor<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExecutor<'conn> {
    /// Wraps a connection returned by `db::open_db`/`db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QueryExecutor for SqliteExecutor<'_> {
    fn execute(&self, sql: &str, params: &[Value]) -> PersistenceResult<usize> {
        match self.conn.execute(sql, params_from_iter(params.iter())) {
            Ok(changed) => {
                debug!(
                    "event=sql_execute module=executor status=ok params={} rows_affected={} sql={}",
                    params.len(),
                    changed,
                    sql
                );
                Ok(changed)
            }
            Err(err) => {
                debug!(
                    "event=sql_execute module=executor status=error params={} sql={} error={}",
                    params.len(),
                    sql,
                    err
                );
                Err(err.into())
            }
        }
    }

    fn query<T, M>(&self, sql: &str, mapper: &M, params: &[Value]) -> StoreResult<Vec<T>>
    where
        M: RowMapper<T> + ?Sized,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut mapped = Vec::new();

        while let Some(row) = rows.next()? {
            let record = read_row(&columns, row)?;
            mapped.push(mapper.map_row(&record)?);
        }

        debug!(
            "event=sql_query module=executor status=ok params={} rows={} sql={}",
            params.len(),
            mapped.len(),
            sql
        );
        Ok(mapped)
    }
}

fn read_row(columns: &[String], row: &Row<'_>) -> rusqlite::Result<ResultRow> {
    columns
        .iter()
        .enumerate()
        .map(|(index, name)| {
            row.get::<_, Value>(index)
                .map(|value| (name.as_str(), value))
        })
        .collect()
}
