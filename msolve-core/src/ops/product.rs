//! Matrix product and transpose

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::format::{display_number, round_to_precision};
use crate::validation::check_multipliable;
use crate::{Matrix, OperationResult, Result};

/// `A x B`
///
/// Each result cell is the dot product of a row of `A` and a column of
/// `B`, rounded to 10 decimal places.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<OperationResult<Matrix>> {
    check_multipliable(a, b)?;

    let (rows_a, cols_a) = a.dimensions();
    let cols_b = b.ncols();
    let mut result = Matrix::zeros_unchecked(rows_a, cols_b);
    let mut steps = vec![
        String::from("Multiplication: A x B"),
        format!("A ({rows_a}x{cols_a}) x B ({cols_a}x{cols_b}) = Result ({rows_a}x{cols_b})"),
        format!("result[i][j] = sum of A[i][k] * B[k][j] for k=1..{cols_a}"),
        String::new(),
    ];

    for i in 0..rows_a {
        for j in 0..cols_b {
            let mut sum = 0.0;
            let mut terms = Vec::with_capacity(cols_a);
            for k in 0..cols_a {
                let (x, y) = (a[(i, k)], b[(k, j)]);
                sum += x * y;
                terms.push(format!("{}*{}", display_number(x), display_number(y)));
            }
            let value = round_to_precision(sum);
            result.set(i, j, value);
            steps.push(format!(
                "[{},{}]: {} = {}",
                i + 1,
                j + 1,
                terms.join(" + "),
                display_number(value)
            ));
        }
    }

    Ok(OperationResult::new(result, steps))
}

/// `A^T`: rows become columns
pub fn transpose(a: &Matrix) -> OperationResult<Matrix> {
    let (rows, cols) = a.dimensions();
    let mut result = Matrix::zeros_unchecked(cols, rows);
    let mut steps = vec![
        String::from("Transpose: A^T"),
        format!("Original: {rows}x{cols} -> Transposed: {cols}x{rows}"),
        String::from("Rows become columns and columns become rows"),
        String::new(),
    ];

    for i in 0..rows {
        for j in 0..cols {
            let value = a[(i, j)];
            result.set(j, i, value);
            steps.push(format!(
                "A^T[{},{}] = A[{},{}] = {}",
                j + 1,
                i + 1,
                i + 1,
                j + 1,
                display_number(value)
            ));
        }
    }

    OperationResult::new(result, steps)
}
