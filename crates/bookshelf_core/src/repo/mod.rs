//! Stores for the bookshelf relations.
//!
//! # Responsibility
//! - Translate domain values into positional statement parameters.
//! - Own the per-entity row mappers and the fixed SQL text per operation.
//!
//! # Invariants
//! - Stores hold nothing but their executor; they never log, retry or
//!   classify errors.

pub mod author_store;
pub mod book_store;
