//! Matrix - Dense `f64` matrix
//!
//! `Matrix` holds the weight matrices of the two-layer network and the
//! intermediate activations computed while training it. Only the handful
//! of operations the network needs are provided.
//!
//! See [`serial`] for the flat text format.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The element at
//! (row, col) is at index `row * cols + col`.
//!
//! # Examples
//!
//! ```
//! use inkscribe_core::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::column(&[1.0, 1.0]);
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.data(), &[3.0, 7.0]);
//! ```

pub mod serial;

use crate::error::{Error, Result};

/// Dense row-major matrix of `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a matrix from column-major data
    ///
    /// This is the inverse of [`Matrix::to_column_major`].
    pub fn from_column_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        let mut m = Matrix::zeros(rows, cols);
        for c in 0..cols {
            for r in 0..rows {
                m.data[r * cols + c] = data[c * rows + r];
            }
        }
        Ok(m)
    }

    /// 1 x n matrix
    pub fn row(values: &[f64]) -> Self {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    /// n x 1 matrix
    pub fn column(values: &[f64]) -> Self {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the shape as (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major element data
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get an element, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set an element
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                x: col,
                y: row,
                width: self.cols,
                height: self.rows,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Flatten column by column
    pub fn to_column_major(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                out.push(self.data[r * self.cols + c]);
            }
        }
        out
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        t
    }

    /// Matrix product `self . other`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                expected: (self.cols, other.cols),
                actual: other.shape(),
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == 0.0 {
                    continue;
                }
                let brow = &other.data[k * other.cols..(k + 1) * other.cols];
                let orow = &mut out.data[i * other.cols..(i + 1) * other.cols];
                for (o, &b) in orow.iter_mut().zip(brow) {
                    *o += a * b;
                }
            }
        }
        Ok(out)
    }

    /// Element-wise product
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Element-wise difference `self - other`
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// In-place element-wise sum
    pub fn add_assign(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Apply `f` to every element
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Multiply every element by `factor` in place
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Drop the first row (used to remove a bias row)
    pub fn without_first_row(&self) -> Matrix {
        if self.rows == 0 {
            return self.clone();
        }
        Matrix {
            rows: self.rows - 1,
            cols: self.cols,
            data: self.data[self.cols..].to_vec(),
        }
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.data(), &[58.0, 64.0, 139.0, 154.0]);

        assert!(a.matmul(&a).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_column_major_round_trip() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let flat = a.to_column_major();
        assert_eq!(flat, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        let back = Matrix::from_column_major(2, 3, &flat).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_elementwise() {
        let a = Matrix::row(&[1.0, 2.0, 3.0]);
        let b = Matrix::row(&[2.0, 2.0, 2.0]);
        assert_eq!(a.hadamard(&b).unwrap().data(), &[2.0, 4.0, 6.0]);
        assert_eq!(a.sub(&b).unwrap().data(), &[-1.0, 0.0, 1.0]);
        assert!(a.hadamard(&Matrix::column(&[1.0, 2.0, 3.0])).is_err());

        let mut c = a.clone();
        c.add_assign(&b).unwrap();
        c.scale(0.5);
        assert_eq!(c.data(), &[1.5, 2.0, 2.5]);
        assert_eq!(a.map(|v| v * v).sum(), 14.0);
    }

    #[test]
    fn test_without_first_row() {
        let a = Matrix::column(&[1.0, 2.0, 3.0]);
        assert_eq!(a.without_first_row().data(), &[2.0, 3.0]);
    }
}
