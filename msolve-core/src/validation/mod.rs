//! Caller-side validation and input parsing
//!
//! The engine checks operand compatibility itself; the 1..=6 size range
//! is a caller policy and is only enforced by code that calls
//! [`validate_dimensions`].

pub mod bounds;
pub mod parsing;

pub use bounds::*;
pub use parsing::*;
