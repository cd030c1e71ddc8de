//! Error types for the recognition pipeline

use thiserror::Error;

/// Errors that can occur while recognizing or learning a page
#[derive(Debug, Error)]
pub enum OcrError {
    /// Image reading error
    #[error("image error: {0}")]
    Io(#[from] inkscribe_io::IoError),

    /// Classifier error
    #[error("recognition error: {0}")]
    Recog(#[from] inkscribe_recog::RecogError),

    /// Expected text doesn't line up with the segmented glyphs
    #[error("page has {glyphs} glyphs but {labels} expected characters")]
    LengthMismatch { glyphs: usize, labels: usize },
}

/// Result type for pipeline operations
pub type OcrResult<T> = Result<T, OcrError>;
