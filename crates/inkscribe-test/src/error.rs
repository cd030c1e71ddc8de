//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test page
    #[error("failed to load page '{path}': {message}")]
    PageLoad { path: String, message: String },

    /// A fixture picture contained an unexpected character
    #[error("invalid fixture pixel {found:?} at ({x}, {y})")]
    InvalidFixture { x: usize, y: usize, found: char },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inkscribe_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
