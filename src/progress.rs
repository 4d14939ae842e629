//! Terminal progress bars for the two discovery phases.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::{Phase, ScanObserver};

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// One progress bar per phase, drawn to stderr.
///
/// The bar for a phase is created when the phase starts and cleared when it
/// finishes, so log lines and the final table are not interleaved with it.
#[derive(Debug, Default)]
pub struct ProgressBars {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressBars {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(bar) = current.take() {
                bar.finish_and_clear();
            }
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl ScanObserver for ProgressBars {
    fn phase_started(&self, phase: Phase, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        bar.set_message(match phase {
            Phase::Dns => "🔍 Resolving candidates",
            Phase::Http => "🌐 Probing HTTP",
        });
        if let Ok(mut current) = self.current.lock() {
            if let Some(previous) = current.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn probe_finished(&self, _phase: Phase) {
        if let Ok(current) = self.current.lock() {
            if let Some(bar) = current.as_ref() {
                bar.inc(1);
            }
        }
    }

    fn phase_finished(&self, _phase: Phase, _hits: usize) {
        self.clear();
    }

    fn phase_cancelled(&self, _phase: Phase) {
        self.clear();
    }
}
