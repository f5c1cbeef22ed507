//! Output formatting and rendering for calculation reports.
//!
//! Supports pretty-printing, JSON serialization, and CSV tables.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(report: &T) {
    debug!("{:#?}", report);
}

/// Prints a report to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes serializable rows as a CSV table, replacing any existing file.
///
/// The table renders the current calculation only; it is not an append log.
pub fn write_table<T: Serialize>(path: &str, rows: &[T]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing CSV table");

    let mut writer = csv::Writer::from_path(path)?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
