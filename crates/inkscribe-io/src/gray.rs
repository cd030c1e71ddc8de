//! Decoded 8-bit luminance image and its binarization

use inkscribe_core::GlyphMatrix;

/// Options controlling how luminance is turned into ink
#[derive(Debug, Clone)]
pub struct BinarizeOptions {
    /// Pixels darker than this are ink (default: 128)
    pub threshold: u8,
    /// Treat light pixels as ink instead, for light-on-dark pages
    /// (default: false)
    pub invert: bool,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            invert: false,
        }
    }
}

impl BinarizeOptions {
    /// Set the ink threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable light-on-dark reading
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Row-major 8-bit luminance, 0 = black, 255 = white
#[derive(Debug, Clone)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Threshold into a glyph matrix
    pub fn binarize(&self, options: &BinarizeOptions) -> inkscribe_core::Result<GlyphMatrix> {
        let data = self
            .data
            .iter()
            .map(|&lum| (lum < options.threshold) != options.invert)
            .collect();
        GlyphMatrix::from_data(self.width, self.height, data)
    }
}

/// ITU-R BT.601 luma
#[inline]
pub(crate) fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Composite over a white background
#[inline]
pub(crate) fn over_white(lum: u8, alpha: u8) -> u8 {
    ((lum as u32 * alpha as u32 + 255 * (255 - alpha as u32) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize() {
        let img = GrayImage {
            width: 3,
            height: 1,
            data: vec![0, 127, 200],
        };
        let g = img.binarize(&BinarizeOptions::default()).unwrap();
        assert_eq!(g.data(), &[true, true, false]);

        let g = img
            .binarize(&BinarizeOptions::default().with_invert(true))
            .unwrap();
        assert_eq!(g.data(), &[false, false, true]);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(over_white(0, 0), 255);
        assert_eq!(over_white(0, 255), 0);
    }
}
