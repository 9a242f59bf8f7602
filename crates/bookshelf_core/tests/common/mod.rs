#![allow(dead_code)]

use bookshelf_core::{
    Author, Book, MappingResult, PersistenceError, PersistenceResult, QueryExecutor, ResultRow,
    RowMapper, StoreResult, Value,
};
use std::cell::RefCell;

pub fn test_author() -> Author {
    Author::new(1, "Jason", 32)
}

pub fn test_author_1() -> Author {
    Author::new(2, "Josh", 21)
}

pub fn test_author_2() -> Author {
    Author::new(3, "Frank", 62)
}

pub fn test_book() -> Book {
    Book::new("KL#$#8978", "ANotherONe", 1)
}

pub fn test_book_1() -> Book {
    Book::new("SO432DFS", "SomeOne", 2)
}

pub fn test_book_2() -> Book {
    Book::new("423*(SD%6", "SISO", 3)
}

/// One statement seen by `RecordingExecutor`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Execute { sql: String, params: Vec<Value> },
    Query { sql: String, params: Vec<Value> },
}

/// Executor double that records every statement and replays canned rows.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Call>>,
    rows: Vec<ResultRow>,
    rows_affected: usize,
    failure: Option<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<ResultRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_rows_affected(rows_affected: usize) -> Self {
        Self {
            rows_affected,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn fail_if_configured(&self) -> PersistenceResult<()> {
        match &self.failure {
            Some(message) => Err(PersistenceError::Executor(message.clone())),
            None => Ok(()),
        }
    }
}

impl QueryExecutor for RecordingExecutor {
    fn execute(&self, sql: &str, params: &[Value]) -> PersistenceResult<usize> {
        self.calls.borrow_mut().push(Call::Execute {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.fail_if_configured()?;
        Ok(self.rows_affected)
    }

    fn query<T, M>(&self, sql: &str, mapper: &M, params: &[Value]) -> StoreResult<Vec<T>>
    where
        M: RowMapper<T> + ?Sized,
    {
        self.calls.borrow_mut().push(Call::Query {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        self.fail_if_configured()?;
        let mapped: MappingResult<Vec<T>> =
            self.rows.iter().map(|row| mapper.map_row(row)).collect();
        Ok(mapped?)
    }
}

pub fn author_row(author: &Author) -> ResultRow {
    ResultRow::new()
        .with("id", author.id)
        .with("name", author.name.clone())
        .with("age", author.age)
}

pub fn book_row(book: &Book) -> ResultRow {
    ResultRow::new()
        .with("isbn", book.isbn.clone())
        .with("title", book.title.clone())
        .with("author_id", book.author_id)
}

pub fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}
