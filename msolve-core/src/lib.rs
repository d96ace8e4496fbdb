#![no_std]

//! msolve core - step-annotated dense matrix engine
//!
//! Pure operations on small dense matrices (addition, subtraction,
//! multiplication, transpose, determinant by cofactor expansion and
//! inverse by the adjugate method). Every operation returns its value
//! together with a human-readable derivation. No I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod operation;
pub mod ops;
pub mod result;
pub mod validation;

pub use error::*;
pub use format::{display_number, format_number, round_to_precision};
pub use matrix::Matrix;
pub use operation::Operation;
pub use ops::*;
pub use result::{OperationResult, Value};
pub use validation::{
    parse_dimensions, parse_matrix, validate_dimensions, MAX_DIMENSION, MIN_DIMENSION,
};
