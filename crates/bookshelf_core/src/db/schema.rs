//! Bundled relational schema for authors and books.
//!
//! `id` is declared `BIGINT` rather than `INTEGER` so it does not alias the
//! rowid; unfiltered selects then follow insertion order.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const REQUIRED_TABLES: &[&str] = &["authors", "books"];

/// Creates the `authors` and `books` tables when absent.
pub fn apply_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    for &table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingTable(table));
        }
    }

    Ok(())
}

/// Returns whether both store relations exist on this connection.
pub fn schema_ready(conn: &Connection) -> DbResult<bool> {
    for &table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
