//! Operation outputs: a computed value paired with its step trace

use alloc::string::String;
use alloc::vec::Vec;

use crate::Matrix;

/// A computed value together with the human-readable derivation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationResult<T> {
    pub result: T,
    pub steps: Vec<String>,
}

impl<T> OperationResult<T> {
    pub fn new(result: T, steps: Vec<String>) -> Self {
        Self { result, steps }
    }

    /// Transform the value, keeping the steps
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        OperationResult {
            result: f(self.result),
            steps: self.steps,
        }
    }

    /// Erase the concrete value type into a [`Value`]
    pub fn into_value(self) -> OperationResult<Value>
    where
        T: Into<Value>,
    {
        self.map(Into::into)
    }
}

/// Result slot of any operation
///
/// `None` is the normal outcome of inverting a singular matrix, not a
/// failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Scalar(f64),
    Matrix(Matrix),
    None,
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}

impl From<Option<Matrix>> for Value {
    fn from(value: Option<Matrix>) -> Self {
        value.map_or(Value::None, Value::Matrix)
    }
}
