//! Probe statistics tracking.
//!
//! This module provides thread-safe counters for every probe outcome kind.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::ProbeOutcome;

/// Thread-safe probe statistics tracker.
///
/// Every `ProbeOutcome` is initialized to zero on creation, so increments never
/// need to insert and the map is never mutated after construction. Share it
/// between probes with `Arc`.
pub struct ProbeStats {
    outcomes: HashMap<ProbeOutcome, AtomicUsize>,
}

impl ProbeStats {
    pub fn new() -> Self {
        let outcomes = ProbeOutcome::iter()
            .map(|outcome| (outcome, AtomicUsize::new(0)))
            .collect();
        ProbeStats { outcomes }
    }

    /// Increment the counter for an outcome.
    pub fn increment(&self, outcome: ProbeOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    pub fn get_count(&self, outcome: ProbeOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.outcomes
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Non-zero counters in declaration order.
    pub fn snapshot(&self) -> Vec<(ProbeOutcome, usize)> {
        ProbeOutcome::iter()
            .map(|outcome| (outcome, self.get_count(outcome)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Logs every non-zero counter.
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            return;
        }
        info!("Probe outcomes ({} total):", self.total());
        for (outcome, count) in snapshot {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}
