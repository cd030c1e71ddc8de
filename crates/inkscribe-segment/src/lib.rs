//! inkscribe-segment - Page segmentation
//!
//! Splits a binarized page into the ordered glyph sequence consumed by the
//! recognizer. Segmentation is a chain of stages, each mapping a sequence
//! of glyph matrices to a finer one:
//!
//! 1. [`split_lines`] - horizontal projection into text lines
//! 2. [`strip_underlines`] - remove underline strokes
//! 3. [`split_words`] - vertical projection with the word gap
//! 4. [`split_glyphs`] - vertical projection with the glyph gap, plus
//!    punctuation matching
//!
//! Boundaries are carried in-band as marker glyphs (see
//! [`inkscribe_core::FunctionalChar`]); stages pass markers through
//! untouched.
//!
//! # Examples
//!
//! ```
//! use inkscribe_core::GlyphMatrix;
//! use inkscribe_segment::{SegmentOptions, segment};
//!
//! let page = GlyphMatrix::new(20, 10);
//! assert!(segment(&page, &SegmentOptions::default()).is_empty());
//! ```

mod options;
mod runs;

pub mod glyphs;
pub mod lines;
pub mod punctuation;
pub mod underline;
pub mod words;

pub use glyphs::split_glyphs;
pub use lines::split_lines;
pub use options::SegmentOptions;
pub use punctuation::{PunctuationTemplate, TEMPLATES, match_punctuation};
pub use underline::strip_underlines;
pub use words::split_words;

use inkscribe_core::GlyphMatrix;

/// One segmentation stage
pub type Stage = fn(Vec<GlyphMatrix>, &SegmentOptions) -> Vec<GlyphMatrix>;

/// The stages run by [`segment`], in order
pub const STAGES: [(&str, Stage); 4] = [
    ("lines", split_lines),
    ("underlines", strip_underlines),
    ("words", split_words),
    ("glyphs", split_glyphs),
];

/// Segment a page into glyphs and boundary markers
pub fn segment(page: &GlyphMatrix, options: &SegmentOptions) -> Vec<GlyphMatrix> {
    STAGES
        .iter()
        .fold(vec![page.clone()], |seq, (name, stage)| {
            let out = stage(seq, options);
            log::debug!("segment: {name} stage produced {} items", out.len());
            out
        })
}
