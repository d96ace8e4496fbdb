//! Element-wise addition and subtraction

use alloc::format;
use alloc::string::String;
use alloc::vec;

use crate::format::display_number;
use crate::validation::check_same_shape;
use crate::{Matrix, OperationResult, Result};

/// `A + B`, cell by cell
pub fn add(a: &Matrix, b: &Matrix) -> Result<OperationResult<Matrix>> {
    elementwise(a, b, "Addition: A + B", '+', |x, y| x + y)
}

/// `A - B`, cell by cell
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<OperationResult<Matrix>> {
    elementwise(a, b, "Subtraction: A - B", '-', |x, y| x - y)
}

fn elementwise(
    a: &Matrix,
    b: &Matrix,
    header: &str,
    symbol: char,
    op: impl Fn(f64, f64) -> f64,
) -> Result<OperationResult<Matrix>> {
    check_same_shape(a, b)?;

    let (rows, cols) = a.dimensions();
    let mut result = Matrix::zeros_unchecked(rows, cols);
    let mut steps = vec![
        String::from(header),
        format!("Each element: result[i][j] = A[i][j] {symbol} B[i][j]"),
        String::new(),
    ];

    for i in 0..rows {
        for j in 0..cols {
            let (x, y) = (a[(i, j)], b[(i, j)]);
            let z = op(x, y);
            result.set(i, j, z);
            steps.push(format!(
                "[{},{}]: {} {symbol} {} = {}",
                i + 1,
                j + 1,
                display_number(x),
                display_number(y),
                display_number(z)
            ));
        }
    }

    Ok(OperationResult::new(result, steps))
}
