//! Reporting for finished discovery runs.
//!
//! This module provides:
//! - `ScanReport`, the serializable summary of a run
//! - A console table reporter
//! - A JSON file reporter

mod console;
mod json;
mod types;

use crate::error_handling::ReportError;

// Re-export public API
pub use console::{render_summary, render_table, ConsoleReport};
pub use json::{save_report, JsonFileReport};
pub use types::ScanReport;

/// Destination for a finished report.
pub trait ReportSink {
    /// Writes `report` to this sink.
    ///
    /// # Errors
    ///
    /// Returns a `ReportError` if the sink cannot be written.
    fn emit(&mut self, report: &ScanReport) -> Result<(), ReportError>;
}
