//! inkscribe Core - Basic data structures for the OCR pipeline
//!
//! This crate provides the data structures shared by every stage of the
//! pipeline:
//!
//! - [`GlyphMatrix`] - Binary ink grid, optionally tagged as a marker
//! - [`FunctionalChar`] - Non-glyph markers (line break, word break, ...)
//! - [`Matrix`] - Dense `f64` matrix used for network weights, with a
//!   flat text format in [`matrix::serial`]

pub mod error;
pub mod glyph;
pub mod matrix;

pub use error::{Error, Result};
pub use glyph::{FunctionalChar, GlyphMatrix, InkBox, UNKNOWN_CHAR};
pub use matrix::Matrix;
