//! Glyph splitting
//!
//! Column-wise analysis of a word with the (smaller) `glyph_gap`
//! threshold. Each ink run is tight-cropped into one glyph; glyphs whose
//! shape matches a punctuation template are replaced by a
//! [`FunctionalChar::Punctuation`] marker and never reach the classifier.

use inkscribe_core::{FunctionalChar, GlyphMatrix};

use crate::SegmentOptions;
use crate::punctuation::match_punctuation;
use crate::runs::ink_runs;

/// Split every word of `seq` into glyphs
pub fn split_glyphs(seq: Vec<GlyphMatrix>, options: &SegmentOptions) -> Vec<GlyphMatrix> {
    let mut out = Vec::new();
    for word in seq {
        if word.is_marker() {
            out.push(word);
            continue;
        }
        let cols: Vec<bool> = (0..word.width()).map(|x| word.column_has_ink(x)).collect();
        for (start, end) in ink_runs(&cols, options.glyph_gap) {
            let column = word.crop(start, 0, end - start, word.height());
            let Some(ink) = column.ink_box() else {
                continue;
            };
            let glyph = column.crop(ink.x, ink.y, ink.width, ink.height);
            let symbol = options
                .detect_punctuation
                .then(|| match_punctuation(&glyph, ink.y, word.height()))
                .flatten();
            match symbol {
                Some(c) => out.push(GlyphMatrix::marker(FunctionalChar::Punctuation(c))),
                None => out.push(glyph),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkscribe_test::{glyph_from_rows, glyph_to_rows};

    #[test]
    fn test_split_glyphs_tight_crops() {
        let word = glyph_from_rows(&[
            "......", //
            "##.#..", //
            "#..##.", //
            "##.#..", //
        ])
        .unwrap();
        let out = split_glyphs(vec![word], &SegmentOptions::default());
        assert_eq!(out.len(), 2);
        assert_eq!(glyph_to_rows(&out[0]), vec!["##", "#.", "##"]);
        assert_eq!(glyph_to_rows(&out[1]), vec!["#.", "##", "#."]);
    }

    #[test]
    fn test_glyph_gap_keeps_split_glyphs_together() {
        let word = glyph_from_rows(&["#.#...#", "#.#...#"]).unwrap();
        let out = split_glyphs(vec![word.clone()], &SegmentOptions::default().with_glyph_gap(1));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].width(), 3);
        let out = split_glyphs(vec![word], &SegmentOptions::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_period_becomes_marker() {
        let word = glyph_from_rows(&[
            "#.#....", //
            "#.#....", //
            "###....", //
            "#.#....", //
            "#.#....", //
            "#.#...#", //
        ])
        .unwrap();
        let out = split_glyphs(vec![word.clone()], &SegmentOptions::default());
        assert_eq!(out.len(), 2);
        assert!(!out[0].is_marker());
        assert_eq!(
            out[1].functional_char(),
            Some(FunctionalChar::Punctuation('.'))
        );

        let opts = SegmentOptions::default().with_detect_punctuation(false);
        let out = split_glyphs(vec![word], &opts);
        assert!(out.iter().all(|g| !g.is_marker()));
    }
}
