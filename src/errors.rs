//! Core error types for the Healthbase application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whichever repository implementation is in
//! use.

use thiserror::Error;

use crate::deletion::VetoReason;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the metadata core.
///
/// Deletion vetoes are an expected, user-facing outcome and are carried
/// here so callers can surface the refusal reason directly.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Deletion not allowed: {0}")]
    Vetoed(#[from] VetoReason),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Input validation failures raised by services before touching a repository.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
