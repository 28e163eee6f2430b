use llm_setup_core::application::ports::LogSink;
use tracing::Level;

/// Forwards every record to `tracing` under the `llm_setup` target, where
/// the CLI's subscriber filters and formats it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "llm_setup", "{message}"),
            Level::WARN => tracing::warn!(target: "llm_setup", "{message}"),
            Level::INFO => tracing::info!(target: "llm_setup", "{message}"),
            Level::DEBUG => tracing::debug!(target: "llm_setup", "{message}"),
            Level::TRACE => tracing::trace!(target: "llm_setup", "{message}"),
        }
    }
}
