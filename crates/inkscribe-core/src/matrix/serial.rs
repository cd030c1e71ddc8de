//! Serialization for Matrix
//!
//! Flat text format used to persist trained network weights.
//!
//! # Format
//!
//! ```text
//! n11,n12,n13;n21,n22,n23;n31,n32,n33
//! ```
//!
//! Rows are separated by `;` and values within a row by `,`. Values are
//! written with the shortest representation that parses back to the same
//! `f64`, so a write/read cycle is exact. On read, line breaks, blank rows
//! and trailing separators are tolerated; a row with an unparsable value
//! or a different number of columns than the first row is rejected.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const ROW_SEPARATOR: char = ';';
const VALUE_SEPARATOR: char = ',';

/// Maximum input size in bytes to prevent unbounded memory growth.
const MAX_INPUT_SIZE: usize = 100_000_000;

impl Matrix {
    /// Read a Matrix from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let buf = read_limited(reader)?;
        Self::read_from_bytes(&buf)
    }

    /// Read a Matrix from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read_from_reader(&mut reader)
    }

    /// Read a Matrix from a byte slice.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::DecodeError(format!("invalid UTF-8: {e}")))?;
        parse_matrix(text)
    }

    /// Write a Matrix to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        for r in 0..self.rows() {
            if r > 0 {
                write!(writer, "{ROW_SEPARATOR}")?;
            }
            for c in 0..self.cols() {
                if c > 0 {
                    write!(writer, "{VALUE_SEPARATOR}")?;
                }
                write!(writer, "{}", self.data()[r * self.cols() + c])?;
            }
        }
        Ok(())
    }

    /// Write a Matrix to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a Matrix to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

/// Read from a reader with a size limit, returning a clear error if exceeded.
fn read_limited(reader: &mut impl Read) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(Error::DecodeError(format!(
            "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
        )));
    }
    Ok(buf)
}

fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut cols = None;
    let mut data = Vec::new();
    let mut rows = 0;

    for row in text.split(ROW_SEPARATOR) {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let values = parse_row(row)?;
        match cols {
            None => cols = Some(values.len()),
            Some(n) if n != values.len() => {
                return Err(Error::DecodeError(format!(
                    "row {rows} has {} values, expected {n}",
                    values.len()
                )));
            }
            Some(_) => {}
        }
        data.extend(values);
        rows += 1;
    }

    let cols = cols.ok_or_else(|| Error::DecodeError("no matrix rows found".to_string()))?;
    Matrix::from_vec(rows, cols, data)
}

fn parse_row(row: &str) -> Result<Vec<f64>> {
    let row = row.trim_end_matches(VALUE_SEPARATOR);
    row.split(VALUE_SEPARATOR)
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>()
                .map_err(|e| Error::DecodeError(format!("invalid value '{v}': {e}")))
        })
        .collect()
}
