//! GlyphMatrix - Binary ink grid flowing through segmentation
//!
//! A `GlyphMatrix` is either a region of ink/no-ink pixels (a page, a
//! line, a word or a single glyph) or a zero-size marker carrying a
//! [`FunctionalChar`]. Segmentation stages consume and produce sequences
//! of them.
//!
//! # Pixel layout
//!
//! Data is stored row-major with no padding. The pixel at (x, y) is at
//! index `y * width + x`; `true` means ink.
//!
//! # Examples
//!
//! ```
//! use inkscribe_core::{FunctionalChar, GlyphMatrix};
//!
//! let mut glyph = GlyphMatrix::new(4, 3);
//! glyph.set(1, 2, true).unwrap();
//! assert!(glyph.row_has_ink(2));
//! assert_eq!(glyph.ink_count(), 1);
//!
//! let marker = GlyphMatrix::marker(FunctionalChar::WordBreak);
//! assert!(marker.is_marker());
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Placeholder character for glyphs the classifier could not resolve
pub const UNKNOWN_CHAR: char = '?';

/// Non-glyph marker injected into segmentation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalChar {
    /// Boundary between two text lines
    LineBreak,
    /// Boundary between two words of a line
    WordBreak,
    /// Glyph that could not be recognized
    Unknown,
    /// Punctuation recognized from its shape alone
    Punctuation(char),
}

impl FunctionalChar {
    /// Character this marker renders as in the final text
    pub fn to_char(self) -> char {
        match self {
            FunctionalChar::LineBreak => '\n',
            FunctionalChar::WordBreak => ' ',
            FunctionalChar::Unknown => UNKNOWN_CHAR,
            FunctionalChar::Punctuation(c) => c,
        }
    }

    /// Whether this marker closes the word being assembled
    pub fn ends_word(self) -> bool {
        !matches!(self, FunctionalChar::Unknown)
    }
}

impl fmt::Display for FunctionalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Tight rectangle around the ink of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Binary ink grid with an optional functional-character tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMatrix {
    width: usize,
    height: usize,
    data: Vec<bool>,
    functional: Option<FunctionalChar>,
}

impl GlyphMatrix {
    /// Create a blank (all no-ink) matrix
    ///
    /// Zero dimensions are allowed and produce an empty matrix; every
    /// stage treats an empty matrix as having no ink.
    pub fn new(width: usize, height: usize) -> Self {
        GlyphMatrix {
            width,
            height,
            data: vec![false; width * height],
            functional: None,
        }
    }

    /// Create a zero-size marker matrix
    pub fn marker(functional: FunctionalChar) -> Self {
        GlyphMatrix {
            width: 0,
            height: 0,
            data: Vec::new(),
            functional: Some(functional),
        }
    }

    /// Create a matrix from row-major pixel data
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<bool>) -> Result<Self> {
        if data.len() != width * height {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(GlyphMatrix {
            width,
            height,
            data,
            functional: None,
        })
    }

    /// Create a matrix from a list of equally long rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(Error::DimensionMismatch {
                    expected: (width, 1),
                    actual: (row.len(), 1),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_data(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major pixel data
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Functional-character tag, `None` for ordinary glyphs
    pub fn functional_char(&self) -> Option<FunctionalChar> {
        self.functional
    }

    /// Whether this matrix is a marker rather than pixel data
    pub fn is_marker(&self) -> bool {
        self.functional.is_some()
    }

    /// Whether the matrix has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a pixel, `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Whether (x, y) holds ink; out-of-bounds positions never do
    #[inline]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Set a pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the matrix.
    pub fn set(&mut self, x: usize, y: usize, ink: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y * self.width + x] = ink;
        Ok(())
    }

    /// Flip every pixel between ink and no-ink
    pub fn invert(&mut self) {
        for px in &mut self.data {
            *px = !*px;
        }
    }

    /// Clear a whole row to no-ink
    pub fn clear_row(&mut self, y: usize) {
        if y < self.height {
            let start = y * self.width;
            self.data[start..start + self.width].fill(false);
        }
    }

    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Whether any pixel of row `y` is set
    pub fn row_has_ink(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().any(|&px| px)
    }

    /// Whether any pixel of column `x` is set
    pub fn column_has_ink(&self, x: usize) -> bool {
        x < self.width && (0..self.height).any(|y| self.data[y * self.width + x])
    }

    /// Number of ink pixels in row `y`
    pub fn row_ink_count(&self, y: usize) -> usize {
        if y >= self.height {
            return 0;
        }
        self.row(y).iter().filter(|&&px| px).count()
    }

    /// Total number of ink pixels
    pub fn ink_count(&self) -> usize {
        self.data.iter().filter(|&&px| px).count()
    }

    /// Tight box around all ink, `None` for a blank matrix
    pub fn ink_box(&self) -> Option<InkBox> {
        let rows: Vec<usize> = (0..self.height).filter(|&y| self.row_has_ink(y)).collect();
        let (&y0, &y1) = (rows.first()?, rows.last()?);
        let x0 = (0..self.width).find(|&x| self.column_has_ink(x))?;
        let x1 = (0..self.width).rev().find(|&x| self.column_has_ink(x))?;
        Some(InkBox {
            x: x0,
            y: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
        })
    }

    /// Copy a rectangular region, clipped to the matrix bounds
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> GlyphMatrix {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);

        let mut data = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.width + x;
            data.extend_from_slice(&self.data[start..start + width]);
        }
        GlyphMatrix {
            width,
            height,
            data,
            functional: None,
        }
    }

    /// Crop to the ink bounding box; a blank matrix becomes empty
    pub fn trim(&self) -> GlyphMatrix {
        match self.ink_box() {
            Some(b) => self.crop(b.x, b.y, b.width, b.height),
            None => GlyphMatrix::new(0, 0),
        }
    }
}

impl fmt::Display for GlyphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fc) = self.functional {
            return writeln!(f, "<{fc:?}>");
        }
        for y in 0..self.height {
            for &px in self.row(y) {
                f.write_str(if px { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
