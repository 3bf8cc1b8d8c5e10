//! Container error type.
//!
//! A single kind: an element was required and none was present.  Allocation
//! failure during growth is not modeled; it aborts, as everywhere else in
//! Rust.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CollectionError {
    /// `peek`, `remove`, or `dequeue` was called on an empty container.
    ///
    /// The container is left unchanged; check `is_empty()`/`len()` first to
    /// avoid the error path entirely.
    #[error("operation requires a non-empty collection")]
    Empty,
}

pub type CollectionResult<T> = Result<T, CollectionError>;
