//! Named-column result rows and the row mapping contract.

use rusqlite::types::{FromSql, FromSqlError, Value, ValueRef};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MappingResult<T> = Result<T, MappingError>;

/// A result row could not be converted into a domain object.
#[derive(Debug)]
pub enum MappingError {
    MissingColumn(String),
    InvalidColumnType {
        column: String,
        source: FromSqlError,
    },
}

impl Display for MappingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(column) => write!(f, "result row has no column `{column}`"),
            Self::InvalidColumnType { column, source } => {
                write!(f, "column `{column}` has an incompatible value: {source}")
            }
        }
    }
}

impl Error for MappingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingColumn(_) => None,
            Self::InvalidColumnType { source, .. } => Some(source),
        }
    }
}

/// One result row: column names paired with owned values, in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    columns: Vec<(String, Value)>,
}

impl ResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, returning the row for chaining.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push((column.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks a column up by name, ignoring ASCII case like SQL identifiers.
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Reads a column by name and converts it with rusqlite's `FromSql`.
    ///
    /// # Errors
    /// - `MissingColumn` when no column has that name.
    /// - `InvalidColumnType` on a storage class mismatch, `NULL` for a
    ///   non-optional target, or an out-of-range integer.
    pub fn get<T: FromSql>(&self, column: &str) -> MappingResult<T> {
        let value = self
            .value(column)
            .ok_or_else(|| MappingError::MissingColumn(column.to_string()))?;

        T::column_result(ValueRef::from(value)).map_err(|source| MappingError::InvalidColumnType {
            column: column.to_string(),
            source,
        })
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Converts one result row into one `T`.
pub trait RowMapper<T> {
    fn map_row(&self, row: &ResultRow) -> MappingResult<T>;
}

impl<T, F> RowMapper<T> for F
where
    F: Fn(&ResultRow) -> MappingResult<T>,
{
    fn map_row(&self, row: &ResultRow) -> MappingResult<T> {
        self(row)
    }
}
