//! Spinner reporting growth rounds while an assembly converges

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::driver::{GrowthSummary, RoundReport};
use crate::io::configuration::SPINNER_TICK_MS;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress display for one growth run
///
/// Hidden progress draws nothing, which keeps quiet runs and tests silent.
pub struct GrowthProgress {
    bar: ProgressBar,
}

impl GrowthProgress {
    /// Visible spinner starting from the seed size
    pub fn new(seed_size: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        bar.set_message(format!("seeded {seed_size} tiles"));
        Self { bar }
    }

    /// Progress that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report a finished round
    pub fn update_round(&self, report: &RoundReport) {
        self.bar.set_position(report.round as u64);
        self.bar.set_message(format!(
            "round {}: +{} tiles, {} total",
            report.round, report.added, report.total
        ));
    }

    /// Rounds reported so far
    pub fn rounds(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the spinner with a final message
    pub fn finish(&self, summary: &GrowthSummary) {
        let state = if summary.converged {
            "converged"
        } else {
            "stopped at round limit"
        };
        self.bar.finish_with_message(format!(
            "{state} after {} rounds (+{} tiles)",
            summary.rounds, summary.tiles_added
        ));
    }
}
