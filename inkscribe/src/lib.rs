//! inkscribe - Page image to corrected text
//!
//! The pipeline has three stages, each in its own crate:
//!
//! - [`segment`] - split a binarized page into lines, words and glyphs
//! - [`recog`] - turn glyphs into feature vectors and classify them
//! - [`dict`] - correct recognized words against a frequency dictionary
//!
//! [`Ocr`] runs the whole pipeline. Page images are read and binarized
//! by [`io`].
//!
//! # Example
//!
//! ```
//! use inkscribe::{Dictionary, GlyphMatrix, Ocr};
//! use inkscribe::recog::ExemplarClassifier;
//!
//! let ocr = Ocr::new(ExemplarClassifier::new());
//! let mut dict = Dictionary::new();
//! let page = GlyphMatrix::new(64, 32);
//! assert_eq!(ocr.recognize(&page, &mut dict), "");
//! ```

mod ocr_error;
pub mod ocr;

// Re-export core types (primary data structures used everywhere)
pub use inkscribe_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use inkscribe_dict as dict;
pub use inkscribe_io as io;
pub use inkscribe_recog as recog;
pub use inkscribe_segment as segment;

pub use ocr_error::{OcrError, OcrResult};
pub use inkscribe_dict::Dictionary;
pub use ocr::{Ocr, OcrOptions};
