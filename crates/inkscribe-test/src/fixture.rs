//! Fixture builders for synthetic pages and glyphs

use crate::error::{TestError, TestResult};
use inkscribe_core::GlyphMatrix;

/// Build a matrix from a picture, one string per row
///
/// `#` is ink, `.` and space are blank. Shorter rows are padded with
/// blank pixels up to the longest row.
///
/// # Errors
///
/// Returns [`TestError::InvalidFixture`] for any other character.
pub fn glyph_from_rows(rows: &[&str]) -> TestResult<GlyphMatrix> {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut glyph = GlyphMatrix::new(width, rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            match c {
                '#' => glyph.set(x, y, true)?,
                '.' | ' ' => {}
                found => return Err(TestError::InvalidFixture { x, y, found }),
            }
        }
    }
    Ok(glyph)
}

/// Render a matrix back into `#`/`.` rows
pub fn glyph_to_rows(glyph: &GlyphMatrix) -> Vec<String> {
    (0..glyph.height())
        .map(|y| {
            glyph
                .row(y)
                .iter()
                .map(|&px| if px { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Copy the ink of `glyph` onto `page` with its top-left corner at (x, y)
///
/// Pixels falling outside `page` are dropped.
pub fn stamp(page: &mut GlyphMatrix, glyph: &GlyphMatrix, x: usize, y: usize) {
    for gy in 0..glyph.height() {
        for gx in 0..glyph.width() {
            if glyph.is_ink(gx, gy) {
                let _ = page.set(x + gx, y + gy, true);
            }
        }
    }
}
