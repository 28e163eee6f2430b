//! Infrastructure adapters for llm-setup.
//!
//! This crate implements the ports defined in
//! `llm_setup_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod sink;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use sink::{MemorySink, TracingSink};
