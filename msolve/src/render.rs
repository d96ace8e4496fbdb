//! Plain-text rendering of results, traces and history

use chrono::{Local, TimeZone};
use msolve_core::{format_number, Matrix, Value};

use crate::history::HistoryEntry;

/// Shown in place of a result when the matrix has no inverse
pub const NO_INVERSE: &str = "No inverse (matrix is singular)";

/// Render a matrix with right-aligned columns, one row per line
pub fn render_matrix(m: &Matrix) -> String {
    let cells: Vec<Vec<String>> = m
        .rows()
        .map(|row| row.iter().map(|&v| format_number(v)).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

    cells
        .iter()
        .map(|row| {
            let row = row
                .iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("[ {row} ]")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_value(value: &Value) -> String {
    match value {
        Value::Scalar(v) => format_number(*v),
        Value::Matrix(m) => render_matrix(m),
        Value::None => NO_INVERSE.to_string(),
    }
}

/// Render a step trace; blank lines are kept as separators
pub fn render_steps(steps: &[String]) -> String {
    steps.join("\n")
}

fn render_timestamp(millis: u64) -> String {
    match Local.timestamp_millis_opt(millis as i64).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

/// Header line plus rendered result for one history entry
pub fn render_history_entry(entry: &HistoryEntry) -> String {
    let operands = match entry.matrix_b {
        Some(_) => format!(
            "A {}x{}, B {}x{}",
            entry.rows_a, entry.cols_a, entry.rows_b, entry.cols_b
        ),
        None => format!("A {}x{}", entry.rows_a, entry.cols_a),
    };

    format!(
        "{} ({operands})  {}\n{}",
        entry.operation,
        render_timestamp(entry.timestamp),
        render_value(&entry.result)
    )
}
