//! inkscribe-io - Page image reading for inkscribe
//!
//! Reads PNG and PNM page images and binarizes them into the
//! [`GlyphMatrix`] the segmentation chain consumes. The format is detected
//! from the file header, never from the extension.
//!
//! # Example
//!
//! ```no_run
//! use inkscribe_io::{BinarizeOptions, read_image_with};
//!
//! let page = read_image_with("scan.png", &BinarizeOptions::default().with_threshold(100))
//!     .unwrap();
//! println!("{}x{}", page.width(), page.height());
//! ```

mod error;
pub mod format;
mod gray;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};
pub use gray::{BinarizeOptions, GrayImage};

use inkscribe_core::GlyphMatrix;
use log::debug;
use std::path::Path;

/// Read and binarize a page image with default options
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GlyphMatrix> {
    read_image_with(path, &BinarizeOptions::default())
}

/// Read and binarize a page image
pub fn read_image_with<P: AsRef<Path>>(
    path: P,
    options: &BinarizeOptions,
) -> IoResult<GlyphMatrix> {
    let data = std::fs::read(path.as_ref())?;
    debug!(
        "read {} bytes from {}",
        data.len(),
        path.as_ref().display()
    );
    read_image_mem(&data, options)
}

/// Decode and binarize a page image held in memory
pub fn read_image_mem(data: &[u8], options: &BinarizeOptions) -> IoResult<GlyphMatrix> {
    let gray = decode_gray(data)?;
    Ok(gray.binarize(options)?)
}

/// Decode a page image into 8-bit luminance without thresholding
pub fn decode_gray(data: &[u8]) -> IoResult<GrayImage> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(data),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support not enabled"
        ))),
    }
}
