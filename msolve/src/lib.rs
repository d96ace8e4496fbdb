//! msolve - step-by-step matrix solver
//!
//! This crate wires the pure engine in `msolve-core` to the pieces around
//! it: key/value persistence, a capped operation history, the display
//! theme setting, configuration and plain-text rendering.
//!
//! ## Architecture
//!
//! - **msolve-core**: matrix type, operations with step traces, parsing
//!   and validation (no I/O)
//! - **msolve**: storage backends, history, settings, session and CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msolve::{parse_matrix, Config, FileStore, Operation, Session};
//!
//! fn example() -> msolve::Result<()> {
//!     let config = Config::default();
//!     let mut session = Session::new(FileStore::new(&config.data_dir), config)?;
//!
//!     let a = parse_matrix("1,2,3;4,5,6;7,8,10")?;
//!     let outcome = session.run(Operation::Inverse, &a, None)?;
//!     for step in &outcome.steps {
//!         println!("{step}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export the engine
pub use msolve_core::{
    format_number, parse_dimensions, parse_matrix, validate_dimensions, Matrix, MatrixError,
    Operation, OperationResult, Value, MAX_DIMENSION, MIN_DIMENSION,
};

pub mod config;
pub mod error;
pub mod history;
pub mod render;
pub mod session;
pub mod settings;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use history::{History, HistoryEntry, NewEntry};
pub use session::Session;
pub use settings::{Settings, ThemeKey};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
