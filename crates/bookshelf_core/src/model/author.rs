//! Author domain model.
//!
//! # Invariants
//! - `id` is unique across the `authors` relation and assigned by the caller.

use serde::{Deserialize, Serialize};

/// Caller-assigned author identifier.
pub type AuthorId = i64;

/// A person who wrote one or more books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Primary key; referenced by `Book::author_id`.
    pub id: AuthorId,
    pub name: String,
    /// Age in years.
    pub age: i32,
}

impl Author {
    /// Creates an author from all of its fields.
    pub fn new(id: AuthorId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}
