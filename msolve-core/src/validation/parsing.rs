//! Parsing of matrix and dimension strings
//!
//! Matrices are written row by row: rows separated by `;` or newlines,
//! cells separated by `,` or whitespace, e.g. `"1,2;3,4"` or `"1 2\n3 4"`.

use alloc::vec::Vec;

use crate::{Matrix, MatrixError, Result};

/// Parse a single cell
///
/// An empty cell or a lone `-` (a half-typed negative number) reads as
/// zero. Anything else must be a finite number.
pub fn parse_cell(cell: &str) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" {
        return Ok(0.0);
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MatrixError::InvalidNumber),
    }
}

fn parse_row(row: &str) -> Result<Vec<f64>> {
    if row.contains(',') {
        row.split(',').map(parse_cell).collect()
    } else {
        row.split_whitespace().map(parse_cell).collect()
    }
}

/// Parse a matrix literal such as `"1,2;3,4"`
///
/// Blank rows are skipped. Rows of differing length fail with
/// [`MatrixError::RaggedRows`].
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let rows = text
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(parse_row)
        .collect::<Result<Vec<_>>>()?;

    Matrix::from_rows(rows)
}

/// Parse a dimension string in the format "rows x cols"
///
/// Accepts `x`, `X` or `,` as the separator (`"3x3"`, `"2X4"`, `"2,4"`).
/// The result is not range checked.
pub fn parse_dimensions(text: &str) -> Result<(usize, usize)> {
    let (rows, cols) = text
        .split_once(|c: char| c == 'x' || c == 'X' || c == ',')
        .ok_or(MatrixError::InvalidDimensions)?;

    let rows = rows
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::InvalidDimensions)?;
    let cols = cols
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::InvalidDimensions)?;

    Ok((rows, cols))
}
