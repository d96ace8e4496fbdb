//! Dimension range and operand compatibility checks

use crate::{Matrix, MatrixError, Result};

/// Smallest supported row or column count
pub const MIN_DIMENSION: usize = 1;

/// Largest supported row or column count
pub const MAX_DIMENSION: usize = 6;

/// Validate a single row or column count against the supported range
pub const fn validate_dimension(value: usize) -> Result<usize> {
    if value < MIN_DIMENSION || value > MAX_DIMENSION {
        return Err(MatrixError::DimensionOutOfRange { value });
    }
    Ok(value)
}

/// Validate a `(rows, cols)` pair against the supported range
pub const fn validate_dimensions(rows: usize, cols: usize) -> Result<(usize, usize)> {
    if let Err(e) = validate_dimension(rows) {
        return Err(e);
    }
    if let Err(e) = validate_dimension(cols) {
        return Err(e);
    }
    Ok((rows, cols))
}

/// Both operands must have identical dimensions
pub fn check_same_shape(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(MatrixError::ShapeMismatch {
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }
    Ok(())
}

/// Columns of `a` must equal rows of `b`
pub fn check_multipliable(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::ShapeMismatch {
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }
    Ok(())
}

pub fn check_square(m: &Matrix) -> Result<()> {
    if !m.is_square() {
        let (rows, cols) = m.dimensions();
        return Err(MatrixError::NotSquare { rows, cols });
    }
    Ok(())
}
