//! Segmentation options

/// Options for the segmentation chain
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Blank columns longer than this separate words (default: 4)
    pub word_gap: usize,
    /// Blank columns longer than this separate glyphs (default: 0)
    pub glyph_gap: usize,
    /// Bottom rows of a line searched for an underline (default: 2)
    pub underline_search_rows: usize,
    /// Fraction of the line's inked width an underline row must cover
    /// (default: 0.9)
    pub underline_min_coverage: f32,
    /// Lines shorter than this are never stripped (default: 3)
    pub underline_min_line_height: usize,
    /// Recognize punctuation by shape (default: true)
    pub detect_punctuation: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            word_gap: 4,
            glyph_gap: 0,
            underline_search_rows: 2,
            underline_min_coverage: 0.9,
            underline_min_line_height: 3,
            detect_punctuation: true,
        }
    }
}

impl SegmentOptions {
    /// Set the word gap threshold
    pub fn with_word_gap(mut self, gap: usize) -> Self {
        self.word_gap = gap;
        self
    }

    /// Set the glyph gap threshold
    pub fn with_glyph_gap(mut self, gap: usize) -> Self {
        self.glyph_gap = gap;
        self
    }

    /// Set underline detection parameters
    pub fn with_underline(mut self, search_rows: usize, min_coverage: f32) -> Self {
        self.underline_search_rows = search_rows;
        self.underline_min_coverage = min_coverage;
        self
    }

    /// Enable or disable punctuation detection
    pub fn with_detect_punctuation(mut self, detect: bool) -> Self {
        self.detect_punctuation = detect;
        self
    }
}
