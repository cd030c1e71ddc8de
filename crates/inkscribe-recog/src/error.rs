//! Error types for inkscribe-recog

use thiserror::Error;

/// Errors that can occur during training and classification
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inkscribe_core::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Samples and labels are not aligned
    #[error("length mismatch: {samples} samples, {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    /// Label not in the classifier's charset
    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    /// Persisted weights don't fit the network
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
