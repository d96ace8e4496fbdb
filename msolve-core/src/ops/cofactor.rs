//! Determinant by cofactor expansion and inverse by the adjugate method

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::format::{display_number as num, round_to_precision};
use crate::validation::check_square;
use crate::{Matrix, OperationResult, Result};

/// Determinants with a smaller magnitude are treated as zero
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Recursive expansion along the first row
///
/// When `trace` is present every level appends its lines, indented two
/// spaces per `depth`. Only the n > 2 sum is rounded; the 1x1 and 2x2
/// base cases return the raw value.
fn expand(m: &Matrix, mut trace: Option<&mut Vec<String>>, depth: usize) -> f64 {
    let n = m.nrows();
    let indent = match trace {
        Some(_) => "  ".repeat(depth),
        None => String::new(),
    };

    if n == 1 {
        let value = m[(0, 0)];
        if let Some(steps) = trace {
            steps.push(format!("{indent}det([{}]) = {}", num(value), num(value)));
        }
        return value;
    }

    if n == 2 {
        let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        let det = a * d - b * c;
        if let Some(steps) = trace {
            steps.push(format!(
                "{indent}det = {}*{} - {}*{} = {}",
                num(a),
                num(d),
                num(b),
                num(c),
                num(det)
            ));
        }
        return det;
    }

    let mut det = 0.0;
    let mut parts = Vec::new();

    for j in 0..n {
        let value = m[(0, j)];
        let positive = j % 2 == 0;
        let sign = if positive { '+' } else { '-' };

        if let Some(steps) = trace.as_deref_mut() {
            steps.push(format!(
                "{indent}Cofactor C(1,{}): {sign}{} * det(Minor)",
                j + 1,
                num(libm::fabs(value))
            ));
        }

        let minor_det = expand(&m.minor(0, j), trace.as_deref_mut(), depth + 1);
        let weight = if positive { value } else { -value };
        det += weight * minor_det;

        if trace.is_some() {
            let prefix = if positive { "" } else { "-" };
            parts.push(format!(
                "{prefix}{}*{}",
                num(libm::fabs(value)),
                num(minor_det)
            ));
        }
    }

    let det = round_to_precision(det);
    if let Some(steps) = trace {
        steps.push(format!("{indent}= {} = {}", parts.join(" + "), num(det)));
    }
    det
}

/// Determinant of a square matrix by cofactor expansion along row 1
pub fn determinant(m: &Matrix) -> Result<OperationResult<f64>> {
    check_square(m)?;

    let n = m.nrows();
    let mut steps = vec![
        format!("Determinant of {n}x{n} matrix"),
        String::from("Using cofactor expansion along first row"),
        String::new(),
    ];
    let det = expand(m, Some(&mut steps), 0);
    steps.push(String::new());
    steps.push(format!("Final Determinant = {}", num(det)));

    Ok(OperationResult::new(det, steps))
}

/// Inverse of a square matrix, or `None` if it is singular
///
/// 1x1 and 2x2 matrices use closed forms. Larger matrices go through the
/// cofactor matrix and its transpose, the adjugate.
pub fn invert(m: &Matrix) -> Result<OperationResult<Option<Matrix>>> {
    check_square(m)?;

    let n = m.nrows();
    let mut steps = vec![format!("Inverse of {n}x{n} matrix"), String::new()];

    let mut det_steps = Vec::new();
    let det = expand(m, Some(&mut det_steps), 0);
    steps.push(String::from("Step 1: Calculate Determinant"));
    steps.append(&mut det_steps);
    steps.push(format!("Determinant = {}", num(det)));
    steps.push(String::new());

    if libm::fabs(det) < SINGULAR_EPSILON {
        steps.push(String::from(
            "Matrix is SINGULAR (det = 0). Inverse does not exist.",
        ));
        return Ok(OperationResult::new(None, steps));
    }

    if n == 1 {
        let value = 1.0 / det;
        steps.push(format!("Inverse = 1/{} = {}", num(det), num(value)));
        let mut result = Matrix::zeros_unchecked(1, 1);
        result.set(0, 0, value);
        return Ok(OperationResult::new(Some(result), steps));
    }

    if n == 2 {
        let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        steps.push(String::from(
            "Step 2: For 2x2 matrix, inverse = (1/det) * adj(A)",
        ));
        steps.push(format!(
            "adj(A) = [[{}, {}], [{}, {}]]",
            num(d),
            num(-b),
            num(-c),
            num(a)
        ));

        let mut result = Matrix::zeros_unchecked(2, 2);
        result.set(0, 0, round_to_precision(d / det));
        result.set(0, 1, round_to_precision(-b / det));
        result.set(1, 0, round_to_precision(-c / det));
        result.set(1, 1, round_to_precision(a / det));
        steps.push(format!("Inverse = (1/{}) * adj(A)", num(det)));
        return Ok(OperationResult::new(Some(result), steps));
    }

    steps.push(String::from("Step 2: Calculate Cofactor Matrix"));
    let mut cofactors = Matrix::zeros_unchecked(n, n);
    for i in 0..n {
        for j in 0..n {
            let minor_det = expand(&m.minor(i, j), None, 0);
            let positive = (i + j) % 2 == 0;
            let cofactor = if positive { minor_det } else { -minor_det };
            cofactors.set(i, j, cofactor);
            steps.push(format!(
                "C({},{}) = {}det(Minor) = {}",
                i + 1,
                j + 1,
                if positive { '+' } else { '-' },
                num(cofactor)
            ));
        }
    }

    steps.push(String::new());
    steps.push(String::from(
        "Step 3: Transpose cofactor matrix to get Adjugate",
    ));
    let mut adjugate = Matrix::zeros_unchecked(n, n);
    for i in 0..n {
        for j in 0..n {
            adjugate.set(j, i, cofactors[(i, j)]);
        }
    }

    steps.push(String::new());
    steps.push(String::from("Step 4: Inverse = (1/det) * Adjugate"));
    let mut result = Matrix::zeros_unchecked(n, n);
    for i in 0..n {
        for j in 0..n {
            result.set(i, j, round_to_precision(adjugate[(i, j)] / det));
        }
    }

    Ok(OperationResult::new(Some(result), steps))
}
