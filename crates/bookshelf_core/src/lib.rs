//! Typed CRUD data access for authors and books over parameterized SQL.
//!
//! Stores take a `QueryExecutor` at construction, bind domain fields to
//! fixed positional statements and rebuild domain values with explicit
//! per-entity row mappers.

pub mod db;
pub mod executor;
pub mod logging;
pub mod model;
pub mod repo;

pub use executor::{
    MappingError, MappingResult, PersistenceError, PersistenceResult, QueryExecutor, ResultRow,
    RowMapper, SqliteExecutor, StoreError, StoreResult, Value,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::author::{Author, AuthorId};
pub use model::book::Book;
pub use repo::author_store::{AuthorRepository, AuthorRowMapper, AuthorStore};
pub use repo::book_store::{BookRepository, BookRowMapper, BookStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
