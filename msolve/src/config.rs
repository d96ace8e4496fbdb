//! Runtime configuration

use std::env;
use std::path::{Path, PathBuf};

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::{Error, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MSOLVE_DATA_DIR";

const DATA_DIR_NAME: &str = ".msolve";

/// Configuration for a solver session
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding persisted history and settings
    pub data_dir: PathBuf,
    /// Maximum number of history entries kept
    pub history_limit: usize,
    /// Print the step trace after each result
    pub show_steps: bool,
}

impl Config {
    /// Create config with an explicit data directory
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Set the history cap
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Set whether step traces are shown
    pub fn with_show_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    /// Reject values the session cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(Error::Config("history limit must be at least 1".into()));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(Error::Config("data directory must not be empty".into()));
        }
        Ok(())
    }

    /// Resolve the data directory: explicit value, then `MSOLVE_DATA_DIR`,
    /// then `$HOME/.msolve`, then `./.msolve`
    pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(DATA_DIR_NAME)))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::resolve_data_dir(None),
            history_limit: DEFAULT_HISTORY_LIMIT,
            show_steps: false,
        }
    }
}
