//! Punctuation templates
//!
//! Punctuation marks are recognized by coarse geometry rather than by the
//! classifier: their size and vertical position relative to the enclosing
//! word separate them from letters far more reliably than their pixels.
//!
//! All measurements are relative to the height `H` of the word the glyph
//! was cut from:
//!
//! | metric       | definition                         |
//! |--------------|------------------------------------|
//! | `rel_height` | glyph height / `H`                 |
//! | `rel_width`  | glyph width / `H`                  |
//! | `aspect`     | glyph width / glyph height         |
//! | `center`     | (top + height / 2) / `H`           |
//! | `fill`       | ink pixels / (width * height)      |

use inkscribe_core::GlyphMatrix;

/// Inclusive `(min, max)` bounds
type Range = (f32, f32);

/// Geometric description of one punctuation mark
#[derive(Debug, Clone, Copy)]
pub struct PunctuationTemplate {
    pub symbol: char,
    pub rel_height: Range,
    pub aspect: Range,
    pub center: Range,
    pub min_fill: f32,
    pub max_rel_width: f32,
}

/// Built-in templates, tried in order
pub const TEMPLATES: [PunctuationTemplate; 4] = [
    PunctuationTemplate {
        symbol: '.',
        rel_height: (0.0, 0.25),
        aspect: (0.5, 2.0),
        center: (0.6, 1.0),
        min_fill: 0.6,
        max_rel_width: 0.25,
    },
    PunctuationTemplate {
        symbol: ',',
        rel_height: (0.1, 0.4),
        aspect: (0.2, 0.8),
        center: (0.6, 1.0),
        min_fill: 0.4,
        max_rel_width: 0.25,
    },
    PunctuationTemplate {
        symbol: '-',
        rel_height: (0.0, 0.2),
        aspect: (2.0, 10.0),
        center: (0.3, 0.7),
        min_fill: 0.8,
        max_rel_width: 0.8,
    },
    PunctuationTemplate {
        symbol: '\'',
        rel_height: (0.1, 0.4),
        aspect: (0.2, 0.8),
        center: (0.0, 0.4),
        min_fill: 0.5,
        max_rel_width: 0.25,
    },
];

impl PunctuationTemplate {
    fn matches(&self, m: &Metrics) -> bool {
        within(m.rel_height, self.rel_height)
            && within(m.aspect, self.aspect)
            && within(m.center, self.center)
            && m.fill >= self.min_fill
            && m.rel_width <= self.max_rel_width
    }
}

struct Metrics {
    rel_height: f32,
    rel_width: f32,
    aspect: f32,
    center: f32,
    fill: f32,
}

fn within(v: f32, (lo, hi): Range) -> bool {
    lo <= v && v <= hi
}

/// Match a tight-cropped glyph against the built-in templates
///
/// `top` is the glyph's first row inside its word and `word_height` the
/// word's height. Returns the symbol of the first matching template.
pub fn match_punctuation(glyph: &GlyphMatrix, top: usize, word_height: usize) -> Option<char> {
    let (w, h) = glyph.dimensions();
    if w == 0 || h == 0 || word_height == 0 {
        return None;
    }
    let word_h = word_height as f32;
    let metrics = Metrics {
        rel_height: h as f32 / word_h,
        rel_width: w as f32 / word_h,
        aspect: w as f32 / h as f32,
        center: (top as f32 + h as f32 / 2.0) / word_h,
        fill: glyph.ink_count() as f32 / (w * h) as f32,
    };
    TEMPLATES
        .iter()
        .find(|t| t.matches(&metrics))
        .map(|t| t.symbol)
}
