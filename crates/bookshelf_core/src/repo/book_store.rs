//! Book store: CRUD over the `books` relation, keyed by ISBN.
//!
//! # Invariants
//! - `author_id` is written as-is; the storage engine enforces the foreign
//!   key and its violations surface as persistence errors.
//! - Same single-statement, absent-is-`None` and silent no-op update rules
//!   as the author store.

use crate::executor::{MappingResult, QueryExecutor, ResultRow, RowMapper, StoreResult, Value};
use crate::model::book::Book;

pub const BOOK_INSERT_SQL: &str = "INSERT INTO Books (isbn, title, author_id) VALUES(?, ?, ?)";
pub const BOOK_FIND_ONE_SQL: &str = "SELECT * FROM books WHERE isbn = ? LIMIT 1";
pub const BOOK_FIND_MANY_SQL: &str = "SELECT * FROM books";
pub const BOOK_UPDATE_SQL: &str =
    "UPDATE books SET isbn = ?, title = ?, author_id = ? WHERE isbn = ?";

/// Repository interface for book CRUD operations.
pub trait BookRepository {
    fn create(&self, book: &Book) -> StoreResult<()>;
    fn find_one(&self, isbn: &str) -> StoreResult<Option<Book>>;
    fn find_many(&self) -> StoreResult<Vec<Book>>;
    /// Overwrites the row keyed by `isbn` with every field of `book`,
    /// including its `isbn`.
    fn update(&self, book: &Book, isbn: &str) -> StoreResult<()>;
}

/// Maps `isbn`, `title` and `author_id` columns onto a `Book`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookRowMapper;

impl RowMapper<Book> for BookRowMapper {
    fn map_row(&self, row: &ResultRow) -> MappingResult<Book> {
        Ok(Book {
            isbn: row.get("isbn")?,
            title: row.get("title")?,
            author_id: row.get("author_id")?,
        })
    }
}

/// Book store over any query executor.
pub struct BookStore<E> {
    executor: E,
}

impl<E: QueryExecutor> BookStore<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E: QueryExecutor> BookRepository for BookStore<E> {
    fn create(&self, book: &Book) -> StoreResult<()> {
        self.executor.execute(
            BOOK_INSERT_SQL,
            &[
                Value::from(book.isbn.clone()),
                Value::from(book.title.clone()),
                Value::from(book.author_id),
            ],
        )?;
        Ok(())
    }

    fn find_one(&self, isbn: &str) -> StoreResult<Option<Book>> {
        let books = self.executor.query(
            BOOK_FIND_ONE_SQL,
            &BookRowMapper,
            &[Value::from(isbn.to_string())],
        )?;
        Ok(books.into_iter().next())
    }

    fn find_many(&self) -> StoreResult<Vec<Book>> {
        self.executor.query(BOOK_FIND_MANY_SQL, &BookRowMapper, &[])
    }

    fn update(&self, book: &Book, isbn: &str) -> StoreResult<()> {
        self.executor.execute(
            BOOK_UPDATE_SQL,
            &[
                Value::from(book.isbn.clone()),
                Value::from(book.title.clone()),
                Value::from(book.author_id),
                Value::from(isbn.to_string()),
            ],
        )?;
        Ok(())
    }
}
