//! Image format detection
//!
//! Detects page image formats by examining magic numbers in the header.

use crate::{IoError, IoResult};

/// Page image formats understood by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    /// PBM/PGM/PPM, ASCII or binary
    Pnm,
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PNM: P1 through P6
    pub const PNM_PREFIX: u8 = b'P';
}

/// Detect image format from the first bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data[0] == magic::PNM_PREFIX && (b'1'..=b'6').contains(&data[1]) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unrecognized image header".to_string(),
    ))
}
