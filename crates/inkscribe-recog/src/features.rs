//! Feature extraction
//!
//! Turns a glyph matrix into the fixed-length numeric vector both
//! classifiers consume. The glyph is first cropped to its ink bounding
//! box so the vector doesn't depend on where the glyph sat in its
//! segment, then sampled on a coarse grid.

use inkscribe_core::GlyphMatrix;

/// Feature extraction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOptions {
    /// Density grid columns (default: 8)
    pub grid_width: usize,
    /// Density grid rows (default: 8)
    pub grid_height: usize,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            grid_width: 8,
            grid_height: 8,
        }
    }
}

impl FeatureOptions {
    /// Set the density grid size
    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Length of the vectors produced with these options
    pub fn feature_len(&self) -> usize {
        self.grid_width * self.grid_height + 1
    }
}

/// Extract the feature vector of a glyph
///
/// The vector holds the ink density of each grid cell in row-major order
/// followed by the aspect feature `h / (w + h)` of the ink box. Each cell
/// covers at least one source pixel, so glyphs smaller than the grid
/// repeat pixels instead of leaving empty cells. Blank glyphs and marker
/// glyphs produce the all-zero vector.
pub fn extract(glyph: &GlyphMatrix, options: &FeatureOptions) -> Vec<f64> {
    let (gw, gh) = (options.grid_width, options.grid_height);
    let mut features = vec![0.0; options.feature_len()];
    let Some(ink) = glyph.ink_box() else {
        return features;
    };
    let (w, h) = (ink.width, ink.height);

    for gy in 0..gh {
        let (y0, y1) = cell_span(gy, gh, h);
        for gx in 0..gw {
            let (x0, x1) = cell_span(gx, gw, w);
            let mut count = 0usize;
            for y in y0..y1 {
                for x in x0..x1 {
                    if glyph.is_ink(ink.x + x, ink.y + y) {
                        count += 1;
                    }
                }
            }
            features[gy * gw + gx] = count as f64 / ((x1 - x0) * (y1 - y0)) as f64;
        }
    }
    features[gw * gh] = h as f64 / (w + h) as f64;
    features
}

/// Source range `[start, end)` of cell `i` of `cells` over `len` pixels
fn cell_span(i: usize, cells: usize, len: usize) -> (usize, usize) {
    let start = i * len / cells;
    let end = ((i + 1) * len / cells).max(start + 1);
    (start, end)
}
