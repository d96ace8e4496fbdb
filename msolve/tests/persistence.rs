//! Integration tests for file-backed history and settings.

use msolve::{
    parse_matrix, Config, FileStore, History, KeyValueStore, Operation, Session, Settings,
    ThemeKey, Value,
};
use msolve::history::HISTORY_KEY;

fn session_in(dir: &std::path::Path) -> Session<FileStore> {
    Session::new(FileStore::new(dir), Config::with_data_dir(dir)).unwrap()
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[test]
fn history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let a = parse_matrix("1,2,3;4,5,6;7,8,10").unwrap();

    {
        let mut session = session_in(dir.path());
        let out = session.run(Operation::Determinant, &a, None).unwrap();
        assert_eq!(out.result, Value::Scalar(-3.0));
        session.run(Operation::Inverse, &a, None).unwrap();
    }

    let history = History::new(FileStore::new(dir.path()));
    let entries = history.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, Operation::Inverse);
    assert_eq!(entries[1].operation, Operation::Determinant);
    assert_eq!(entries[1].matrix_a, a);
    assert_eq!((entries[1].rows_a, entries[1].cols_a), (3, 3));
    assert!(entries[0].timestamp >= entries[1].timestamp);
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn history_file_uses_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let a = parse_matrix("2,0;0,2").unwrap();
    let b = parse_matrix("1,1;1,1").unwrap();
    session.run(Operation::Multiply, &a, Some(&b)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("matrix_solver_history.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &json[0];
    assert_eq!(entry["operation"], "Multiplication");
    assert_eq!(entry["result"], serde_json::json!([[2.0, 2.0], [2.0, 2.0]]));
    assert_eq!(entry["matrixB"], serde_json::json!([[1.0, 1.0], [1.0, 1.0]]));
    assert_eq!(entry["colsB"], 2);
}

#[test]
fn history_clear_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let a = parse_matrix("1").unwrap();
    session.run(Operation::Transpose, &a, None).unwrap();

    let store = FileStore::new(dir.path());
    assert!(store.get(HISTORY_KEY).unwrap().is_some());

    session.history().clear().unwrap();
    assert!(store.get(HISTORY_KEY).unwrap().is_none());
    assert!(session.history().entries().is_empty());
}

#[test]
fn corrupt_history_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("matrix_solver_history.json"), "[{\"id\":").unwrap();

    let mut session = session_in(dir.path());
    assert!(session.history().entries().is_empty());

    let a = parse_matrix("1,2;3,4").unwrap();
    session.run(Operation::Determinant, &a, None).unwrap();
    assert_eq!(session.history().entries().len(), 1);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[test]
fn theme_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut settings = Settings::new(FileStore::new(dir.path()));
        assert_eq!(settings.theme(), ThemeKey::Default);
        settings.set_theme(ThemeKey::Forest).unwrap();
    }

    let settings = Settings::new(FileStore::new(dir.path()));
    assert_eq!(settings.theme(), ThemeKey::Forest);
}

#[test]
fn theme_and_history_share_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.settings().set_theme(ThemeKey::Amoled).unwrap();
    session
        .run(Operation::Transpose, &parse_matrix("1,2").unwrap(), None)
        .unwrap();

    assert!(dir.path().join("matrix_solver_theme.json").exists());
    assert!(dir.path().join("matrix_solver_history.json").exists());
    assert_eq!(session.settings().theme(), ThemeKey::Amoled);
}
