//! Error types for Gradebook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Unified error type for Gradebook operations
#[derive(Debug, Error)]
pub enum GradebookError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// Malformed or truncated record data. Fatal at load time: there is no
    /// partial-record recovery, since silently dropping records is worse
    /// than failing.
    #[error("Data corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Student not found")]
    StudentNotFound,

    #[error("Grade not found for subject")]
    GradeNotFound,
}
