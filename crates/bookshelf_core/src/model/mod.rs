//! Domain records persisted by the stores.
//!
//! # Responsibility
//! - Define plain value types for authors and books.
//! - Keep storage concerns (SQL, column names) out of the model.
//!
//! # Invariants
//! - Identifiers are caller-assigned; nothing here generates keys.
//! - Equality is structural over every field.

pub mod author;
pub mod book;
