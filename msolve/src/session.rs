//! Operation session: validate, compute, record

use msolve_core::{validate_dimensions, Matrix, MatrixError, Operation, OperationResult, Value};
use tracing::{debug, info};

use crate::history::{History, NewEntry};
use crate::settings::Settings;
use crate::storage::KeyValueStore;
use crate::{Config, Result};

/// Ties the matrix engine to persisted history and settings
pub struct Session<S> {
    store: S,
    config: Config,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&mut self) -> History<&mut S> {
        History::new(&mut self.store).with_limit(self.config.history_limit)
    }

    pub fn settings(&mut self) -> Settings<&mut S> {
        Settings::new(&mut self.store)
    }

    /// Run `op` and record it in the history
    ///
    /// Operands must be 1..=6 in each dimension. A singular inverse comes
    /// back with [`Value::None`] and is not recorded; neither are errors.
    pub fn run(
        &mut self,
        op: Operation,
        a: &Matrix,
        b: Option<&Matrix>,
    ) -> Result<OperationResult<Value>> {
        validate_dimensions(a.nrows(), a.ncols())?;
        let b = if op.arity() == 2 {
            let b = b.ok_or(MatrixError::MissingOperand)?;
            validate_dimensions(b.nrows(), b.ncols())?;
            Some(b)
        } else {
            None
        };

        debug!(
            operation = %op,
            a = ?a.dimensions(),
            b = ?b.map(Matrix::dimensions),
            "running operation"
        );
        let outcome = op.apply(a, b)?;

        if outcome.result.is_none() {
            info!(operation = %op, "matrix is singular, not recorded");
            return Ok(outcome);
        }

        self.history().add(NewEntry {
            matrix_a: a.clone(),
            matrix_b: b.cloned(),
            operation: op,
            result: outcome.result.clone(),
        })?;

        Ok(outcome)
    }
}
