//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `llm-setup-adapters` crate provides implementations.

use std::path::Path;

use tracing::Level;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `llm_setup_adapters::filesystem::LocalFilesystem` (production)
/// - `llm_setup_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every operation is blocking and is attempted exactly once.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Copy one file, replacing the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> ScaffoldResult<()>;

    /// Recursively copy `from` into `to`, merging with whatever `to` already
    /// holds. Same-named files are overwritten; nothing is deleted.
    ///
    /// Returns the number of files copied. A `to` inside `from` is a
    /// `FilesystemError`.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> ScaffoldResult<usize>;
}

/// Port for the human-readable log trail of a run.
///
/// Services receive a sink at construction instead of reaching for a global
/// logger.
///
/// Implemented by:
/// - `llm_setup_adapters::sink::TracingSink` (forwards to `tracing`)
/// - `llm_setup_adapters::sink::MemorySink` (captures for assertions)
pub trait LogSink: Send + Sync {
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::ERROR, message);
    }
}
