//! PNG page image support

use crate::gray::{GrayImage, luminance, over_white};
use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder};
use std::io::{BufRead, Seek};

/// Read a PNG image as 8-bit luminance
///
/// Every PNG color type is accepted. Palette entries and color samples
/// are reduced to luma; transparency is composited over white so that
/// transparent regions never read as ink.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bits = match info.bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        BitDepth::Sixteen => 16,
    };
    let palette: Option<Vec<u8>> = info.palette.as_ref().map(|p| p.to_vec());

    if color_type == ColorType::Indexed && palette.is_none() {
        return Err(IoError::InvalidData(
            "indexed PNG without palette".to_string(),
        ));
    }

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let channels = match color_type {
        ColorType::Grayscale | ColorType::Indexed => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
    };
    let max = (1u32 << bits) - 1;

    let mut lum = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for x in 0..width {
            let s = |c: usize| sample(row, x * channels + c, bits);
            let to8 = |v: u32| (v * 255 / max) as u8;
            let value = match color_type {
                ColorType::Grayscale => to8(s(0)),
                ColorType::GrayscaleAlpha => over_white(to8(s(0)), to8(s(1))),
                ColorType::Rgb => luminance(to8(s(0)), to8(s(1)), to8(s(2))),
                ColorType::Rgba => {
                    over_white(luminance(to8(s(0)), to8(s(1)), to8(s(2))), to8(s(3)))
                }
                ColorType::Indexed => {
                    let idx = s(0) as usize * 3;
                    match palette.as_deref().and_then(|p| p.get(idx..idx + 3)) {
                        Some(rgb) => luminance(rgb[0], rgb[1], rgb[2]),
                        None => {
                            return Err(IoError::InvalidData(format!(
                                "palette index {} out of range",
                                idx / 3
                            )));
                        }
                    }
                }
            };
            lum.push(value);
        }
    }

    Ok(GrayImage {
        width,
        height,
        data: lum,
    })
}

/// Extract the `index`-th sample of `bits` width from a packed row
fn sample(row: &[u8], index: usize, bits: u32) -> u32 {
    match bits {
        16 => ((row[index * 2] as u32) << 8) | row[index * 2 + 1] as u32,
        8 => row[index] as u32,
        _ => {
            let bit = index * bits as usize;
            let shift = 8 - bits as usize - (bit % 8);
            ((row[bit / 8] >> shift) as u32) & ((1 << bits) - 1)
        }
    }
}
