//! Segmentation regression test
//!
//! Builds synthetic pages from stamped glyphs and checks the marker
//! sequence produced by each stage and by the full chain.
//!
//!   Test 0: split_lines() -- three bands separated by blank rows
//!   Test 1: segment() -- blank page
//!   Test 2: segment() -- two lines with word break, period and underline
//!   Test 3: strip_underlines() -- underline across a whole line
//!   Test 4: segment() -- a lone flat-based glyph keeps its bottom row

use inkscribe_core::{FunctionalChar, GlyphMatrix};
use inkscribe_segment::{SegmentOptions, segment, split_lines, strip_underlines};
use inkscribe_test::{RegParams, glyph_from_rows, stamp};

const LETTER: [&str; 5] = ["###", "#.#", "###", "#.#", "#.#"];

fn letter() -> GlyphMatrix {
    glyph_from_rows(&LETTER).expect("letter fixture")
}

fn fill_rows(page: &mut GlyphMatrix, rows: std::ops::Range<usize>, x: usize) {
    for y in rows {
        page.set(x, y, true).expect("in bounds");
    }
}

/// Render a sequence as a compact string: `g` for glyphs, marker chars
/// otherwise.
fn shape(seq: &[GlyphMatrix]) -> String {
    seq.iter()
        .map(|g| match g.functional_char() {
            Some(FunctionalChar::LineBreak) => '|',
            Some(FunctionalChar::WordBreak) => '_',
            Some(fc) => fc.to_char(),
            None => 'g',
        })
        .collect()
}

/// Test 0: three ink bands on a 10x20 page
#[test]
fn test_0_three_lines() {
    let mut rp = RegParams::new("segment_0_lines");

    let mut page = GlyphMatrix::new(10, 20);
    fill_rows(&mut page, 0..3, 2);
    fill_rows(&mut page, 6..11, 4);
    fill_rows(&mut page, 16..20, 7);

    let out = split_lines(vec![page], &SegmentOptions::default());
    rp.compare_values(5.0, out.len() as f64, 0.0);
    rp.compare_strings("g|g|g", &shape(&out));
    let heights: Vec<usize> = out
        .iter()
        .filter(|g| !g.is_marker())
        .map(|g| g.height())
        .collect();
    rp.check(heights == vec![3, 5, 4], "line heights 3, 5, 4");
    rp.check(
        out.iter().filter(|g| !g.is_marker()).all(|g| g.width() == 10),
        "lines keep full page width",
    );

    assert!(rp.cleanup(), "segment_0 regression test failed");
}

/// Test 1: blank page yields nothing
#[test]
fn test_1_blank_page() {
    let mut rp = RegParams::new("segment_1_blank");

    let out = segment(&GlyphMatrix::new(40, 30), &SegmentOptions::default());
    rp.compare_values(0.0, out.len() as f64, 0.0);

    assert!(rp.cleanup(), "segment_1 regression test failed");
}

/// Test 2: full chain on a two-line page
#[test]
fn test_2_full_chain() {
    let mut rp = RegParams::new("segment_2_chain");

    let glyph = letter();
    let mut page = GlyphMatrix::new(30, 15);
    // line 1: "gg g." with a one-pixel period on the baseline
    stamp(&mut page, &glyph, 1, 1);
    stamp(&mut page, &glyph, 5, 1);
    stamp(&mut page, &glyph, 14, 1);
    page.set(18, 5, true).expect("in bounds");
    // line 2: one underlined glyph
    stamp(&mut page, &glyph, 1, 8);
    for x in 0..5 {
        page.set(x, 13, true).expect("in bounds");
    }

    let out = segment(&page, &SegmentOptions::default());
    rp.compare_strings("gg_g.|g", &shape(&out));
    for g in out.iter().filter(|g| !g.is_marker()) {
        rp.compare_glyphs(&glyph, g);
    }

    let plain = SegmentOptions::default().with_detect_punctuation(false);
    let out = segment(&page, &plain);
    rp.compare_strings("gg_gg|g", &shape(&out));

    assert!(rp.cleanup(), "segment_2 regression test failed");
}

/// Test 3: underline spanning a line of several words
#[test]
fn test_3_underlined_line() {
    let mut rp = RegParams::new("segment_3_underline");

    let glyph = letter();
    let mut page = GlyphMatrix::new(20, 7);
    stamp(&mut page, &glyph, 0, 0);
    stamp(&mut page, &glyph, 12, 0);
    for x in 0..15 {
        page.set(x, 5, true).expect("in bounds");
    }

    let opts = SegmentOptions::default();
    let lines = strip_underlines(split_lines(vec![page.clone()], &opts), &opts);
    rp.compare_values(1.0, lines.len() as f64, 0.0);
    rp.compare_values(5.0, lines[0].height() as f64, 0.0);
    // only the two letters' bottom strokes remain on the last row
    rp.compare_values(4.0, lines[0].row_ink_count(4) as f64, 0.0);

    let out = segment(&page, &opts);
    rp.compare_strings("g_g", &shape(&out));

    assert!(rp.cleanup(), "segment_3 regression test failed");
}

/// Test 4: a glyph alone on its line segments like the same glyph in a word
#[test]
fn test_4_lone_glyph_line() {
    let mut rp = RegParams::new("segment_4_lone");

    let o = glyph_from_rows(&["###", "#.#", "#.#", "###"]).expect("o fixture");
    let n = glyph_from_rows(&["##.", "#.#", "#.#", "#.#"]).expect("n fixture");
    let mut page = GlyphMatrix::new(24, 12);
    // line 1: "on no"
    stamp(&mut page, &o, 1, 1);
    stamp(&mut page, &n, 5, 1);
    stamp(&mut page, &n, 14, 1);
    stamp(&mut page, &o, 18, 1);
    // line 2: a lone "o"
    stamp(&mut page, &o, 1, 7);

    let out = segment(&page, &SegmentOptions::default());
    rp.compare_strings("gg_gg|g", &shape(&out));
    if let Some(last) = out.last() {
        rp.compare_glyphs(&o, last);
    }
    let o_count = out.iter().filter(|&g| *g == o).count();
    rp.compare_values(3.0, o_count as f64, 0.0);

    assert!(rp.cleanup(), "segment_4 regression test failed");
}
