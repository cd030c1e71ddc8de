//! Error types for inkscribe-dict

use thiserror::Error;

/// Errors that can occur while building or persisting a dictionary
#[derive(Debug, Error)]
pub enum DictError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(String),
}

/// Result type for dictionary operations
pub type DictResult<T> = Result<T, DictError>;
