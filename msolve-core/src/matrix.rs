//! Dense row-major matrix value type
//!
//! A [`Matrix`] is always non-empty and rectangular. Operations never
//! mutate their inputs; every result is a freshly allocated matrix.

use alloc::vec;
use alloc::vec::Vec;

use crate::{MatrixError, Result};

/// Dense matrix of `f64` cells stored in row-major order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a `rows` x `cols` matrix with every cell set to zero
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        Ok(Self::zeros_unchecked(rows, cols))
    }

    pub(crate) fn zeros_unchecked(rows: usize, cols: usize) -> Self {
        Self {
            nrows: rows,
            ncols: cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the `n` x `n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    /// Build a matrix from a sequence of rows
    ///
    /// Fails with [`MatrixError::EmptyMatrix`] when there are no rows or
    /// row 0 is empty, and with [`MatrixError::RaggedRows`] for the first
    /// row whose length differs from row 0.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: ncols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self { nrows, ncols, data })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Get the cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Set the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.nrows && col < self.ncols, "cell out of bounds");
        self.data[row * self.ncols + col] = value;
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.nrows {
            let start = row * self.ncols;
            Some(&self.data[start..start + self.ncols])
        } else {
            None
        }
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.ncols)
    }

    /// Row-major view of all cells
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy into a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Matrix with `row` and `col` removed, remaining cells in their
    /// original relative order
    ///
    /// The matrix must have at least two rows and two columns.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        debug_assert!(self.nrows > 1 && self.ncols > 1);
        let data = self
            .rows()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();

        Self {
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            data,
        }
    }

    /// Copy into a zero matrix of a new size, keeping the overlapping
    /// top-left block
    pub fn resized(&self, rows: usize, cols: usize) -> Result<Self> {
        let mut out = Self::zeros(rows, cols)?;
        for i in 0..self.nrows.min(rows) {
            for j in 0..self.ncols.min(cols) {
                out.set(i, j, self[(i, j)]);
            }
        }
        Ok(out)
    }

    /// Compare cell by cell within an absolute tolerance
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| libm::fabs(a - b) <= tolerance)
    }
}

impl core::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.nrows && col < self.ncols, "cell out of bounds");
        &self.data[row * self.ncols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
