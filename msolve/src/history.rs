//! Persisted operation history
//!
//! A newest-first log of completed operations stored as one JSON array.
//! The log is capped (50 entries by default); adding past the cap drops
//! the oldest entries.

use std::time::{SystemTime, UNIX_EPOCH};

use msolve_core::{Matrix, Operation, Value};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::storage::KeyValueStore;
use crate::Result;

/// Storage key for the history log
pub const HISTORY_KEY: &str = "@matrix_solver_history";

/// Default number of entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub matrix_a: Matrix,
    pub matrix_b: Option<Matrix>,
    pub operation: Operation,
    pub result: Value,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub rows_a: usize,
    pub cols_a: usize,
    /// Zero for single-matrix operations
    pub rows_b: usize,
    pub cols_b: usize,
}

/// An entry before it is assigned an id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub matrix_a: Matrix,
    pub matrix_b: Option<Matrix>,
    pub operation: Operation,
    pub result: Value,
}

impl NewEntry {
    fn into_entry(self, id: String, timestamp: u64) -> HistoryEntry {
        let (rows_a, cols_a) = self.matrix_a.dimensions();
        let (rows_b, cols_b) = self.matrix_b.as_ref().map_or((0, 0), Matrix::dimensions);
        HistoryEntry {
            id,
            matrix_a: self.matrix_a,
            matrix_b: self.matrix_b,
            operation: self.operation,
            result: self.result,
            timestamp,
            rows_a,
            cols_a,
            rows_b,
            cols_b,
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Entry id: the timestamp followed by 9 random base-36 characters
fn generate_id(timestamp: u64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{timestamp}{suffix}")
}

/// History log over a key/value store
pub struct History<S> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> History<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the maximum number of entries kept
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// All entries, newest first
    ///
    /// Missing, unreadable or corrupt data reads as an empty log.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read history");
            Vec::new()
        })
    }

    /// Read the stored log; only corrupt data falls back to empty
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "discarding corrupt history");
            Vec::new()
        }))
    }

    /// Record an entry at the front of the log
    pub fn add(&mut self, entry: NewEntry) -> Result<HistoryEntry> {
        let timestamp = now_millis();
        let entry = entry.into_entry(generate_id(timestamp), timestamp);

        // A failed read must not overwrite the stored log
        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        entries.truncate(self.limit);
        self.store.set(HISTORY_KEY, &serde_json::to_string(&entries)?)?;

        info!(
            id = %entry.id,
            operation = %entry.operation,
            len = entries.len(),
            "recorded history entry"
        );
        Ok(entry)
    }

    /// Remove every entry
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(HISTORY_KEY)?;
        info!("cleared history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn entry(op: Operation, value: f64) -> NewEntry {
        NewEntry {
            matrix_a: Matrix::identity(2).unwrap(),
            matrix_b: None,
            operation: op,
            result: Value::Scalar(value),
        }
    }

    #[test]
    fn test_add_is_newest_first() {
        let mut history = History::new(MemoryStore::new());
        history.add(entry(Operation::Determinant, 1.0)).unwrap();
        history.add(entry(Operation::Transpose, 2.0)).unwrap();

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Transpose);
        assert_eq!(entries[1].operation, Operation::Determinant);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(MemoryStore::new());
        for i in 0..(DEFAULT_HISTORY_LIMIT + 5) {
            history.add(entry(Operation::Determinant, i as f64)).unwrap();
        }

        let entries = history.entries();
        assert_eq!(entries.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(entries[0].result, Value::Scalar(54.0));
        assert_eq!(entries[DEFAULT_HISTORY_LIMIT - 1].result, Value::Scalar(5.0));
    }

    #[test]
    fn test_entry_dimensions() {
        let mut history = History::new(MemoryStore::new());
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(3, 1).unwrap();
        let recorded = history
            .add(NewEntry {
                matrix_a: a.clone(),
                matrix_b: Some(b),
                operation: Operation::Multiply,
                result: Value::Matrix(Matrix::zeros(2, 1).unwrap()),
            })
            .unwrap();
        assert_eq!((recorded.rows_a, recorded.cols_a), (2, 3));
        assert_eq!((recorded.rows_b, recorded.cols_b), (3, 1));

        let recorded = history.add(entry(Operation::Inverse, 1.0)).unwrap();
        assert_eq!((recorded.rows_b, recorded.cols_b), (0, 0));
        assert!(recorded.matrix_b.is_none());
    }

    #[test]
    fn test_id_format() {
        let id = generate_id(1_700_000_000_000);
        assert_eq!(id.len(), 13 + ID_SUFFIX_LEN);
        assert!(id.starts_with("1700000000000"));
        assert!(id[13..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_corrupt_history_reads_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "{not json").unwrap();
        let mut history = History::new(store);
        assert!(history.entries().is_empty());

        history.add(entry(Operation::Determinant, 3.0)).unwrap();
        assert_eq!(history.entries().len(), 1);
    }

    /// Store whose reads can be made to fail
    struct UnreadableStore {
        inner: MemoryStore,
        fail_reads: bool,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(crate::Error::io(
                    "history.json",
                    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                ));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_read_error_keeps_stored_history() {
        let mut store = UnreadableStore {
            inner: MemoryStore::new(),
            fail_reads: false,
        };
        {
            let mut history = History::new(&mut store);
            for i in 0..5 {
                history.add(entry(Operation::Determinant, i as f64)).unwrap();
            }
        }

        store.fail_reads = true;
        {
            let mut history = History::new(&mut store);
            assert!(history.entries().is_empty());
            assert!(history.add(entry(Operation::Transpose, 9.0)).is_err());
        }

        store.fail_reads = false;
        let mut history = History::new(&mut store);
        assert_eq!(history.entries().len(), 5);
        history.add(entry(Operation::Transpose, 9.0)).unwrap();
        assert_eq!(history.entries().len(), 6);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(MemoryStore::new());
        history.add(entry(Operation::Determinant, 1.0)).unwrap();
        history.clear().unwrap();
        assert!(history.entries().is_empty());
        history.clear().unwrap();
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = entry(Operation::Subtract, 0.5).into_entry("id1".into(), 42);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["operation"], "Subtraction");
        assert_eq!(json["matrixA"], serde_json::json!([[1.0, 0.0], [0.0, 1.0]]));
        assert!(json["matrixB"].is_null());
        assert_eq!(json["result"], 0.5);
        assert_eq!(json["rowsB"], 0);
        assert_eq!(json["timestamp"], 42);
    }
}
