//! Word splitting
//!
//! Column-wise analysis of a line: blank column runs longer than
//! `word_gap` separate words, shorter ones stay inside the word as
//! letter spacing.

use inkscribe_core::{FunctionalChar, GlyphMatrix};

use crate::SegmentOptions;
use crate::runs::ink_runs;

/// Split every line of `seq` into words
///
/// Each word keeps the full height of its line so that later stages can
/// judge a glyph's vertical position. A [`FunctionalChar::WordBreak`]
/// marker separates consecutive words; none trails the last word.
pub fn split_words(seq: Vec<GlyphMatrix>, options: &SegmentOptions) -> Vec<GlyphMatrix> {
    let mut out = Vec::new();
    for line in seq {
        if line.is_marker() {
            out.push(line);
            continue;
        }
        let cols: Vec<bool> = (0..line.width()).map(|x| line.column_has_ink(x)).collect();
        for (i, (start, end)) in ink_runs(&cols, options.word_gap).into_iter().enumerate() {
            if i > 0 {
                out.push(GlyphMatrix::marker(FunctionalChar::WordBreak));
            }
            out.push(line.crop(start, 0, end - start, line.height()));
        }
    }
    out
}
