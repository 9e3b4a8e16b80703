//! Terminal progress bar fed by the engine's progress channel.

use crate::diff::{ProgressInfo, ProgressPhase, ProgressSink, ProgressSinkError};
use indicatif::{ProgressBar, ProgressStyle};

/// Sink that renders progress events on an indicatif bar.
///
/// The bar tracks the overall percent (0..=100) and shows the phase's
/// status message. Like every progress consumer, it is observational only.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    /// Create a bar for one diff run
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40}] {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn emit(&mut self, info: ProgressInfo) -> Result<(), ProgressSinkError> {
        self.bar.set_position(u64::from(info.percent));
        let message = info
            .message
            .unwrap_or_else(|| info.phase.name().to_string());
        if info.phase == ProgressPhase::Done {
            self.bar.finish_and_clear();
        } else {
            self.bar.set_message(message);
        }
        Ok(())
    }
}
