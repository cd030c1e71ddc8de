//! Error types for inkscribe-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// inkscribe core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid matrix dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Operand shapes do not agree
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data could not be decoded
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
