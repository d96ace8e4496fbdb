//! Named operations and dispatch

use core::str::FromStr;

use crate::ops::{add, determinant, invert, multiply, subtract, transpose};
use crate::{Matrix, MatrixError, OperationResult, Result, Value};

/// The six supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    #[cfg_attr(feature = "serde", serde(rename = "Addition"))]
    Add,
    #[cfg_attr(feature = "serde", serde(rename = "Subtraction"))]
    Subtract,
    #[cfg_attr(feature = "serde", serde(rename = "Multiplication"))]
    Multiply,
    Transpose,
    Determinant,
    Inverse,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
        Operation::Inverse,
    ];

    /// Display name, also used as the persisted history label
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Transpose => "Transpose",
            Operation::Determinant => "Determinant",
            Operation::Inverse => "Inverse",
        }
    }

    /// Short key used on the command line
    pub const fn key(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Transpose => "transpose",
            Operation::Determinant => "det",
            Operation::Inverse => "inverse",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "x",
            Operation::Transpose => "T",
            Operation::Determinant => "det",
            Operation::Inverse => "inv",
        }
    }

    /// Number of matrix operands (1 or 2)
    pub const fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => 2,
            Operation::Transpose | Operation::Determinant | Operation::Inverse => 1,
        }
    }

    /// Validate operands and run the operation
    ///
    /// `b` is required for binary operations and ignored otherwise.
    pub fn apply(self, a: &Matrix, b: Option<&Matrix>) -> Result<OperationResult<Value>> {
        match self {
            Operation::Add => Ok(add(a, second(b)?)?.into_value()),
            Operation::Subtract => Ok(subtract(a, second(b)?)?.into_value()),
            Operation::Multiply => Ok(multiply(a, second(b)?)?.into_value()),
            Operation::Transpose => Ok(transpose(a).into_value()),
            Operation::Determinant => Ok(determinant(a)?.into_value()),
            Operation::Inverse => Ok(invert(a)?.into_value()),
        }
    }
}

fn second(b: Option<&Matrix>) -> Result<&Matrix> {
    b.ok_or(MatrixError::MissingOperand)
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                s.eq_ignore_ascii_case(op.key())
                    || s.eq_ignore_ascii_case(op.name())
                    || s == op.symbol()
            })
            .or(match s.to_ascii_lowercase().as_str() {
                "subtract" => Some(Operation::Subtract),
                "multiply" => Some(Operation::Multiply),
                "invert" => Some(Operation::Inverse),
                _ => None,
            })
            .ok_or(MatrixError::UnknownOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("Subtraction".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("MUL".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("x".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("det".parse::<Operation>(), Ok(Operation::Determinant));
        assert_eq!("invert".parse::<Operation>(), Ok(Operation::Inverse));
        assert_eq!(
            "power".parse::<Operation>(),
            Err(MatrixError::UnknownOperation)
        );
    }

    #[test]
    fn test_arity_and_names() {
        assert_eq!(Operation::Add.arity(), 2);
        assert_eq!(Operation::Inverse.arity(), 1);
        assert_eq!(Operation::Multiply.name(), "Multiplication");
        for op in Operation::ALL {
            assert_eq!(op.key().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_apply_dispatch() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::identity(2).unwrap();

        let out = Operation::Multiply.apply(&a, Some(&b)).unwrap();
        assert_eq!(out.result, Value::Matrix(a.clone()));

        let out = Operation::Determinant.apply(&a, None).unwrap();
        assert_eq!(out.result, Value::Scalar(-2.0));

        let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let out = Operation::Inverse.apply(&singular, None).unwrap();
        assert!(out.result.is_none());
    }

    #[test]
    fn test_apply_binary_without_operand() {
        let a = Matrix::identity(2).unwrap();
        assert_eq!(
            Operation::Add.apply(&a, None),
            Err(MatrixError::MissingOperand)
        );
    }
}
