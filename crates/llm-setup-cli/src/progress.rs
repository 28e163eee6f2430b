//! Spinner-backed log sink for long-running commands.
//!
//! Every record still goes to `tracing`; on a terminal the latest message is
//! also shown next to a spinner so `setup` and `migrate` don't look hung.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

use llm_setup_adapters::TracingSink;
use llm_setup_core::application::ports::LogSink;

const TICK: Duration = Duration::from_millis(80);

pub struct ProgressSink {
    bar: ProgressBar,
    inner: TracingSink,
}

impl ProgressSink {
    /// A visible spinner when `visible`, otherwise a hidden bar that only
    /// forwards to `tracing`.
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                bar.set_style(style);
            }
            bar.enable_steady_tick(TICK);
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            inner: TracingSink::new(),
        }
    }

    /// Remove the spinner line before the command prints its summary.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl LogSink for ProgressSink {
    fn record(&self, level: Level, message: &str) {
        // Log lines are written with the spinner cleared so they don't
        // interleave with it.
        self.bar.suspend(|| self.inner.record(level, message));
        self.bar.set_message(message.to_owned());
    }
}
