//! Underline removal
//!
//! An underline is a single horizontal ink row spanning (nearly) the whole
//! inked width of a line. Left in place it merges the glyphs above it into
//! one column run, so it is cleared before word and glyph splitting.
//!
//! Two shapes are handled:
//!
//! - an underline touching the text: the lowest qualifying row within the
//!   bottom `underline_search_rows` rows of a line is cleared, provided
//!   there is ink above it and the row either overhangs that ink on both
//!   sides or joins at least two separate column runs of it. A single
//!   glyph with a flat base (`o`, `L`, `E`) therefore keeps its bottom
//!   stroke;
//! - a detached underline: the line splitter already cut it into a thin
//!   line of its own right below a text line; that thin line and the line
//!   break in front of it are dropped.

use inkscribe_core::{FunctionalChar, GlyphMatrix};
use log::debug;

use crate::SegmentOptions;
use crate::runs::{ink_runs, longest_run};

/// Remove underlines from every line of `seq`
pub fn strip_underlines(seq: Vec<GlyphMatrix>, options: &SegmentOptions) -> Vec<GlyphMatrix> {
    let mut out: Vec<GlyphMatrix> = Vec::with_capacity(seq.len());
    for line in seq {
        if line.is_marker() {
            out.push(line);
            continue;
        }
        if is_detached_underline(&line, &out, options) {
            debug!("dropping detached underline of width {}", line.width());
            out.pop();
            continue;
        }
        out.push(strip_line(line, options));
    }
    out
}

/// Clear the underline row of one line, if it has one
fn strip_line(mut line: GlyphMatrix, options: &SegmentOptions) -> GlyphMatrix {
    let height = line.height();
    if height < options.underline_min_line_height.max(2) {
        return line;
    }
    let Some(extent) = line.ink_box() else {
        return line;
    };

    let lowest = height.saturating_sub(options.underline_search_rows);
    let found = (lowest..height).rev().find(|&y| {
        covers(&line, y, extent.width, options.underline_min_coverage)
            && underlines_ink_above(&line, y)
    });

    match found {
        Some(y) => {
            debug!("clearing underline at row {y} of {height}");
            line.clear_row(y);
            let bottom = (0..height).rev().find(|&r| line.row_has_ink(r)).unwrap_or(0);
            line.crop(0, 0, line.width(), bottom + 1)
        }
        None => line,
    }
}

/// Whether the longest ink run of row `y` spans `min_coverage` of `width`
fn covers(line: &GlyphMatrix, y: usize, width: usize, min_coverage: f32) -> bool {
    let run = longest_run(line.row(y));
    run > 1 && run as f32 >= min_coverage * width as f32
}

/// Whether the longest run of row `y` sits under the ink above it as a bar
///
/// The run must either stick out past the columns inked above it on both
/// sides or span a blank column between two of them. A glyph's own base
/// does neither.
fn underlines_ink_above(line: &GlyphMatrix, y: usize) -> bool {
    let Some((start, end)) = ink_runs(line.row(y), 0)
        .into_iter()
        .max_by_key(|&(s, e)| e - s)
    else {
        return false;
    };
    let above: Vec<bool> = (0..line.width())
        .map(|x| (0..y).any(|r| line.is_ink(x, r)))
        .collect();
    let columns = ink_runs(&above, 0);
    let (Some(first), Some(last)) = (columns.first(), columns.last()) else {
        return false;
    };
    let overhangs = start < first.0 && end > last.1;
    overhangs || ink_runs(&above[start..end], 0).len() >= 2
}

/// A thin bar directly below a text line, at least as wide as that line's ink
fn is_detached_underline(
    line: &GlyphMatrix,
    previous: &[GlyphMatrix],
    options: &SegmentOptions,
) -> bool {
    if line.height() >= options.underline_min_line_height {
        return false;
    }
    let [.., text, brk] = previous else {
        return false;
    };
    if brk.functional_char() != Some(FunctionalChar::LineBreak) || text.is_marker() {
        return false;
    }
    let Some(text_box) = text.ink_box() else {
        return false;
    };
    (0..line.height())
        .filter(|&y| line.row_has_ink(y))
        .all(|y| covers(line, y, text_box.width, options.underline_min_coverage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkscribe_test::{glyph_from_rows, glyph_to_rows};

    #[test]
    fn test_attached_underline_is_cleared() {
        let line = glyph_from_rows(&[
            "#.#..#.", //
            "#.#..#.", //
            "#.#..#.", //
            "#######", //
        ])
        .unwrap();
        let out = strip_underlines(vec![line], &SegmentOptions::default());
        assert_eq!(out.len(), 1);
        assert_eq!(glyph_to_rows(&out[0]), vec!["#.#..#.", "#.#..#.", "#.#..#."]);
    }

    #[test]
    fn test_solid_block_is_not_underlined() {
        let line = glyph_from_rows(&["####", "####", "####"]).unwrap();
        let out = strip_underlines(vec![line.clone()], &SegmentOptions::default());
        assert_eq!(out, vec![line]);
    }

    #[test]
    fn test_lone_glyph_keeps_its_base() {
        let line = glyph_from_rows(&["###", "#.#", "#.#", "###"]).unwrap();
        let out = strip_underlines(vec![line.clone()], &SegmentOptions::default());
        assert_eq!(out, vec![line]);

        let line = glyph_from_rows(&["#..", "#..", "#..", "###"]).unwrap();
        let out = strip_underlines(vec![line.clone()], &SegmentOptions::default());
        assert_eq!(out, vec![line]);
    }

    #[test]
    fn test_lone_glyph_underline_is_cleared() {
        let line = glyph_from_rows(&[
            ".###.", //
            ".#.#.", //
            ".#.#.", //
            ".###.", //
            "#####", //
        ])
        .unwrap();
        let out = strip_underlines(vec![line], &SegmentOptions::default());
        assert_eq!(
            glyph_to_rows(&out[0]),
            vec![".###.", ".#.#.", ".#.#.", ".###."]
        );
    }

    #[test]
    fn test_short_rows_are_not_underlines() {
        let line = glyph_from_rows(&["#...#", "#...#", "###.#"]).unwrap();
        let out = strip_underlines(vec![line.clone()], &SegmentOptions::default());
        assert_eq!(out[0], line);
    }

    #[test]
    fn test_detached_underline_is_dropped() {
        let text = glyph_from_rows(&["#.#.#", "#.#.#", "#.#.#"]).unwrap();
        let bar = glyph_from_rows(&["#####"]).unwrap();
        let seq = vec![text.clone(), GlyphMatrix::marker(FunctionalChar::LineBreak), bar];
        let out = strip_underlines(seq, &SegmentOptions::default());
        assert_eq!(out, vec![text]);
    }

    #[test]
    fn test_thin_first_line_is_kept() {
        let bar = glyph_from_rows(&["#####"]).unwrap();
        let out = strip_underlines(vec![bar.clone()], &SegmentOptions::default());
        assert_eq!(out, vec![bar]);
    }
}
