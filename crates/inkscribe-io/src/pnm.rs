//! PNM (Portable Any Map) page image support
//!
//! Reads PBM (P1/P4), PGM (P2/P5) and PPM (P3/P6), both the ASCII and the
//! binary variants. PBM stores ink directly (1 = black); grayscale and
//! color samples are scaled to 8-bit luminance.

use crate::gray::{GrayImage, luminance};
use crate::{IoError, IoResult};

/// Largest page accepted, in pixels
const MAX_PIXELS: usize = 1 << 28;

/// Read a PNM image from memory as 8-bit luminance
pub fn read_pnm(data: &[u8]) -> IoResult<GrayImage> {
    let mut cursor = Cursor { data, pos: 0 };

    let magic = cursor.token()?;
    let kind = match magic.as_slice() {
        b"P1" | b"P2" | b"P3" | b"P4" | b"P5" | b"P6" => magic[1],
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM magic {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = cursor.number()?;
    let height = cursor.number()?;
    if width == 0 || height == 0 || width.saturating_mul(height) > MAX_PIXELS {
        return Err(IoError::InvalidData(format!(
            "invalid PNM dimensions {width}x{height}"
        )));
    }
    let maxval = match kind {
        b'1' | b'4' => 1,
        _ => cursor.number()?,
    };
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval {maxval}")));
    }

    let npix = width * height;
    let lum = match kind {
        b'1' => {
            let mut out = Vec::with_capacity(npix);
            while out.len() < npix {
                match cursor.next_non_space() {
                    Some(b'0') => out.push(255),
                    Some(b'1') => out.push(0),
                    Some(c) => {
                        return Err(IoError::InvalidData(format!(
                            "unexpected byte {c:#04x} in PBM data"
                        )));
                    }
                    None => return Err(truncated()),
                }
            }
            out
        }
        b'4' => {
            let body = cursor.binary_body()?;
            let stride = width.div_ceil(8);
            if body.len() < stride * height {
                return Err(truncated());
            }
            let mut out = Vec::with_capacity(npix);
            for y in 0..height {
                for x in 0..width {
                    let bit = (body[y * stride + x / 8] >> (7 - x % 8)) & 1;
                    out.push(if bit == 1 { 0 } else { 255 });
                }
            }
            out
        }
        b'2' | b'3' => {
            let channels = if kind == b'2' { 1 } else { 3 };
            let mut samples = Vec::with_capacity(npix * channels);
            for _ in 0..npix * channels {
                samples.push(scale(cursor.number()?, maxval));
            }
            to_luminance(&samples, channels)
        }
        _ => {
            let channels = if kind == b'5' { 1 } else { 3 };
            let wide = maxval > 255;
            let body = cursor.binary_body()?;
            let per_sample = if wide { 2 } else { 1 };
            if body.len() < npix * channels * per_sample {
                return Err(truncated());
            }
            let samples: Vec<u8> = (0..npix * channels)
                .map(|i| {
                    let v = if wide {
                        ((body[2 * i] as usize) << 8) | body[2 * i + 1] as usize
                    } else {
                        body[i] as usize
                    };
                    scale(v, maxval)
                })
                .collect();
            to_luminance(&samples, channels)
        }
    };

    Ok(GrayImage {
        width,
        height,
        data: lum,
    })
}

fn truncated() -> IoError {
    IoError::InvalidData("PNM data truncated".to_string())
}

fn scale(v: usize, maxval: usize) -> u8 {
    (v.min(maxval) * 255 / maxval) as u8
}

fn to_luminance(samples: &[u8], channels: usize) -> Vec<u8> {
    if channels == 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(3)
        .map(|c| luminance(c[0], c[1], c[2]))
        .collect()
}

/// Header tokenizer honoring `#` comments
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn skip_space_and_comments(&mut self) {
        while let Some(&c) = self.data.get(self.pos) {
            if c == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<Vec<u8>> {
        self.skip_space_and_comments();
        let start = self.pos;
        while let Some(&c) = self.data.get(self.pos) {
            if c.is_ascii_whitespace() || c == b'#' {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("unexpected end of PNM header".to_string()));
        }
        Ok(self.data[start..self.pos].to_vec())
    }

    fn number(&mut self) -> IoResult<usize> {
        let tok = self.token()?;
        std::str::from_utf8(&tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "invalid PNM number {:?}",
                    String::from_utf8_lossy(&tok)
                ))
            })
    }

    fn next_non_space(&mut self) -> Option<u8> {
        self.skip_space_and_comments();
        let c = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(c)
    }

    /// Raster data starts after exactly one whitespace byte
    fn binary_body(&self) -> IoResult<&'a [u8]> {
        match self.data.get(self.pos) {
            Some(c) if c.is_ascii_whitespace() => Ok(&self.data[self.pos + 1..]),
            _ => Err(truncated()),
        }
    }
}
