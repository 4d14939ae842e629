//! JSON report file.
//!
//! Writes one pretty-printed JSON document per run under the results
//! directory. A run without results writes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::types::ScanReport;
use super::ReportSink;
use crate::error_handling::ReportError;

/// Serializes `report` to `dir/file_name`, creating `dir` if needed.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// - `ReportError::NoResults` if the report has no results (nothing is written)
/// - `ReportError::Io` if the directory or file cannot be written
/// - `ReportError::Serialize` if the report cannot be encoded
pub fn save_report(
    report: &ScanReport,
    dir: &Path,
    file_name: &Path,
) -> Result<PathBuf, ReportError> {
    if report.results.is_empty() {
        return Err(ReportError::NoResults);
    }

    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let body = serde_json::to_string_pretty(report)?;
    fs::write(&path, body).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("💾 Results saved to: {}", path.display());
    Ok(path)
}

/// `ReportSink` that writes the JSON report file.
#[derive(Debug, Clone)]
pub struct JsonFileReport {
    dir: PathBuf,
    file_name: PathBuf,
    written: Option<PathBuf>,
}

impl JsonFileReport {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            written: None,
        }
    }

    /// Path of the last file written, if any.
    pub fn written_path(&self) -> Option<&Path> {
        self.written.as_deref()
    }
}

impl ReportSink for JsonFileReport {
    fn emit(&mut self, report: &ScanReport) -> Result<(), ReportError> {
        let path = save_report(report, &self.dir, &self.file_name)?;
        self.written = Some(path);
        Ok(())
    }
}
