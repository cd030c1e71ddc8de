//! Line splitting
//!
//! A row holds ink if any of its pixels is set. Each maximal run of ink
//! rows becomes one full-width line matrix, and a
//! [`FunctionalChar::LineBreak`] marker separates consecutive lines.

use inkscribe_core::{FunctionalChar, GlyphMatrix};

use crate::SegmentOptions;
use crate::runs::ink_runs;

/// Split every page matrix of `seq` into text lines
///
/// Markers pass through unchanged. A matrix without ink rows contributes
/// nothing, so an all-blank page yields an empty sequence.
pub fn split_lines(seq: Vec<GlyphMatrix>, _options: &SegmentOptions) -> Vec<GlyphMatrix> {
    let mut out = Vec::new();
    for page in seq {
        if page.is_marker() {
            out.push(page);
            continue;
        }
        let rows: Vec<bool> = (0..page.height()).map(|y| page.row_has_ink(y)).collect();
        for (i, (start, end)) in ink_runs(&rows, 0).into_iter().enumerate() {
            if i > 0 {
                out.push(GlyphMatrix::marker(FunctionalChar::LineBreak));
            }
            out.push(page.crop(0, start, page.width(), end - start));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_is_empty() {
        let opts = SegmentOptions::default();
        assert!(split_lines(vec![GlyphMatrix::new(8, 8)], &opts).is_empty());
        assert!(split_lines(vec![GlyphMatrix::new(0, 0)], &opts).is_empty());
        assert!(split_lines(Vec::new(), &opts).is_empty());
    }

    #[test]
    fn test_single_line_has_no_marker() {
        let mut page = GlyphMatrix::new(4, 6);
        page.set(1, 2, true).unwrap();
        page.set(2, 3, true).unwrap();
        let out = split_lines(vec![page], &SegmentOptions::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].dimensions(), (4, 2));
    }

    #[test]
    fn test_markers_pass_through() {
        let seq = vec![GlyphMatrix::marker(FunctionalChar::WordBreak)];
        let out = split_lines(seq.clone(), &SegmentOptions::default());
        assert_eq!(out, seq);
    }
}
