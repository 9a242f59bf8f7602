//! Query execution contract shared by every store.
//!
//! # Responsibility
//! - Define the minimal parameterized `execute`/`query` capability stores
//!   depend on.
//! - Define the persistence/mapping error taxonomy surfaced to callers.
//!
//! # Invariants
//! - Parameters bind positionally, in slice order, to `?` placeholders.
//! - `query` maps rows in the order the engine returns them and aborts on the
//!   first row that fails to map.
//! - Executors never retry; every failure reaches the caller unmodified.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod row;
pub mod sqlite;

pub use rusqlite::types::Value;
pub use row::{MappingError, MappingResult, ResultRow, RowMapper};
pub use sqlite::SqliteExecutor;

pub type PersistenceResult<T> = Result<T, PersistenceError>;
pub type StoreResult<T> = Result<T, StoreError>;

/// A statement could not be run by the executor.
///
/// Constraint violations (duplicate keys, dangling foreign keys),
/// connectivity problems and malformed SQL all land here without being
/// classified further.
#[derive(Debug)]
pub enum PersistenceError {
    Sqlite(rusqlite::Error),
    /// Failure reported by a non-SQLite executor.
    Executor(String),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "statement failed: {err}"),
            Self::Executor(message) => write!(f, "statement failed: {message}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Executor(_) => None,
        }
    }
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Error returned by store operations.
#[derive(Debug)]
pub enum StoreError {
    Persistence(PersistenceError),
    Mapping(MappingError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Mapping(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::Mapping(err) => Some(err),
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

impl From<MappingError> for StoreError {
    fn from(value: MappingError) -> Self {
        Self::Mapping(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Persistence(PersistenceError::Sqlite(value))
    }
}

/// Parameterized statement execution against a relational store.
pub trait QueryExecutor {
    /// Runs a non-returning statement and reports the number of rows it
    /// changed.
    fn execute(&self, sql: &str, params: &[Value]) -> PersistenceResult<usize>;

    /// Runs a returning statement and maps every result row with `mapper`.
    fn query<T, M>(&self, sql: &str, mapper: &M, params: &[Value]) -> StoreResult<Vec<T>>
    where
        M: RowMapper<T> + ?Sized;
}

impl<E: QueryExecutor> QueryExecutor for &E {
    fn execute(&self, sql: &str, params: &[Value]) -> PersistenceResult<usize> {
        (**self).execute(sql, params)
    }

    fn query<T, M>(&self, sql: &str, mapper: &M, params: &[Value]) -> StoreResult<Vec<T>>
    where
        M: RowMapper<T> + ?Sized,
    {
        (**self).query(sql, mapper, params)
    }
}
