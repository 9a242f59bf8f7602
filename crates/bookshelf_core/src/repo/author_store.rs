//! Author store: CRUD over the `authors` relation.
//!
//! # Responsibility
//! - Bind `Author` fields to the fixed author statements by name.
//! - Rebuild `Author` values from result rows by column name.
//!
//! # Invariants
//! - Every operation issues exactly one statement.
//! - `find_one` reports absence as `None`, never as an error.
//! - `update` with no matching row is a silent no-op.

use crate::executor::{MappingResult, QueryExecutor, ResultRow, RowMapper, StoreResult, Value};
use crate::model::author::{Author, AuthorId};

pub const AUTHOR_INSERT_SQL: &str = "INSERT INTO authors (id, name, age) VALUES(?, ?, ?)";
pub const AUTHOR_FIND_ONE_SQL: &str = "SELECT * FROM authors WHERE id=? LIMIT 1";
pub const AUTHOR_FIND_MANY_SQL: &str = "SELECT * FROM authors";
pub const AUTHOR_UPDATE_SQL: &str = "UPDATE authors SET id = ?, name = ?, age = ? WHERE id = ?";

/// Repository interface for author CRUD operations.
pub trait AuthorRepository {
    fn create(&self, author: &Author) -> StoreResult<()>;
    fn find_one(&self, id: AuthorId) -> StoreResult<Option<Author>>;
    fn find_many(&self) -> StoreResult<Vec<Author>>;
    /// Overwrites the row keyed by `id` with every field of `author`,
    /// including its `id`.
    fn update(&self, author: &Author, id: AuthorId) -> StoreResult<()>;
}

/// Maps `id`, `name` and `age` columns onto an `Author`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorRowMapper;

impl RowMapper<Author> for AuthorRowMapper {
    fn map_row(&self, row: &ResultRow) -> MappingResult<Author> {
        Ok(Author {
            id: row.get("id")?,
            name: row.get("name")?,
            age: row.get("age")?,
        })
    }
}

/// Author store over any query executor.
pub struct AuthorStore<E> {
    executor: E,
}

impl<E: QueryExecutor> AuthorStore<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E: QueryExecutor> AuthorRepository for AuthorStore<E> {
    fn create(&self, author: &Author) -> StoreResult<()> {
        self.executor.execute(
            AUTHOR_INSERT_SQL,
            &[
                Value::from(author.id),
                Value::from(author.name.clone()),
                Value::from(author.age),
            ],
        )?;
        Ok(())
    }

    fn find_one(&self, id: AuthorId) -> StoreResult<Option<Author>> {
        let authors = self
            .executor
            .query(AUTHOR_FIND_ONE_SQL, &AuthorRowMapper, &[Value::from(id)])?;
        Ok(authors.into_iter().next())
    }

    fn find_many(&self) -> StoreResult<Vec<Author>> {
        self.executor
            .query(AUTHOR_FIND_MANY_SQL, &AuthorRowMapper, &[])
    }

    fn update(&self, author: &Author, id: AuthorId) -> StoreResult<()> {
        self.executor.execute(
            AUTHOR_UPDATE_SQL,
            &[
                Value::from(author.id),
                Value::from(author.name.clone()),
                Value::from(author.age),
                Value::from(id),
            ],
        )?;
        Ok(())
    }
}
