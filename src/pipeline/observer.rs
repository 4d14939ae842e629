//! Progress notifications from the pipeline.

/// Pipeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// DNS resolution over the candidate list
    Dns,
    /// HTTP probing over the DNS hits
    Http,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Dns => f.write_str("DNS"),
            Phase::Http => f.write_str("HTTP"),
        }
    }
}

/// Receives progress events while a discovery run is in flight.
///
/// All methods default to doing nothing. Calls happen on the task driving
/// the pipeline, so implementations should return quickly.
pub trait ScanObserver: Send + Sync {
    /// A phase is about to probe `total` items.
    fn phase_started(&self, _phase: Phase, _total: usize) {}

    /// One probe of the phase completed (hit, miss, or failure).
    fn probe_finished(&self, _phase: Phase) {}

    /// Every probe of the phase completed; `hits` produced a result.
    fn phase_finished(&self, _phase: Phase, _hits: usize) {}

    /// The run was cancelled while the phase still had probes outstanding.
    fn phase_cancelled(&self, _phase: Phase) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
