//! Error types for matrix engine operations

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand dimensions are incompatible with the requested operation
    Shape,
    /// Malformed caller input (ragged rows, unparsable text, bad sizes)
    Input,
}

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Matrix has no rows or no columns
    EmptyMatrix,
    /// A row's length differs from the length of row 0
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Operand dimensions are incompatible
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Operation requires a square matrix
    NotSquare { rows: usize, cols: usize },
    /// Dimension outside the supported caller range
    DimensionOutOfRange { value: usize },
    /// A cell could not be parsed as a finite number
    InvalidNumber,
    /// A dimension string could not be parsed
    InvalidDimensions,
    /// Binary operation invoked without its second operand
    MissingOperand,
    /// Operation name not recognized
    UnknownOperation,
}

impl MatrixError {
    /// Classify the error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::ShapeMismatch { .. } | MatrixError::NotSquare { .. } => ErrorCategory::Shape,
            _ => ErrorCategory::Input,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::EmptyMatrix => write!(f, "Matrix must have at least one row and one column"),
            MatrixError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {found} columns, expected {expected}",
                row + 1
            ),
            MatrixError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "Incompatible dimensions: {}x{} and {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrixError::DimensionOutOfRange { value } => write!(
                f,
                "Dimension {value} out of range {}..={}",
                crate::validation::MIN_DIMENSION,
                crate::validation::MAX_DIMENSION
            ),
            MatrixError::InvalidNumber => write!(f, "Invalid number"),
            MatrixError::InvalidDimensions => write!(f, "Invalid dimensions, expected ROWSxCOLS"),
            MatrixError::MissingOperand => write!(f, "Operation requires a second matrix"),
            MatrixError::UnknownOperation => write!(f, "Unknown operation"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
