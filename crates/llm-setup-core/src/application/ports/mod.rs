//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `llm-setup-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, whole-file writes, tree copies
//!   - `LogSink`: the log trail services leave behind
//!
//! - **Driving (Input) Ports**: the service methods themselves, called by the CLI

pub mod output;

pub use output::{Filesystem, LogSink};
