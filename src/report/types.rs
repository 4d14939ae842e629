//! Report data model.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::ProbeResult;

/// Everything a reporter needs about a finished run.
///
/// Serializes to the JSON report format.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target_domain: String,
    /// ISO-8601 local timestamp of report creation
    pub scan_date: DateTime<Local>,
    pub total_subdomains_tested: usize,
    pub subdomains_found: usize,
    pub likely_apis: usize,
    pub results: Vec<ProbeResult>,
}

impl ScanReport {
    pub fn new(
        target_domain: impl Into<String>,
        total_subdomains_tested: usize,
        results: Vec<ProbeResult>,
    ) -> Self {
        Self {
            target_domain: target_domain.into(),
            scan_date: Local::now(),
            total_subdomains_tested,
            subdomains_found: results.len(),
            likely_apis: results.iter().filter(|r| r.likely_api()).count(),
            results,
        }
    }

    /// Number of results that answered over HTTPS or HTTP.
    pub fn accessible_count(&self) -> usize {
        self.results.iter().filter(|r| r.accessible()).count()
    }

    /// Results with likely APIs first, otherwise in discovery order.
    pub fn sorted_results(&self) -> Vec<&ProbeResult> {
        let mut sorted: Vec<&ProbeResult> = self.results.iter().collect();
        sorted.sort_by_key(|r| !r.likely_api());
        sorted
    }
}
