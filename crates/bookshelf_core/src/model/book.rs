//! Book domain model.
//!
//! # Invariants
//! - `isbn` is the natural key; there is no surrogate id.
//! - `author_id` must name an existing author when persisted. The storage
//!   engine enforces this, not the model.

use crate::model::author::AuthorId;
use serde::{Deserialize, Serialize};

/// A published book keyed by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    /// Foreign key into `authors.id`.
    pub author_id: AuthorId,
}

impl Book {
    /// Creates a book from all of its fields.
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author_id,
        }
    }
}
