//! Log sink adapters.

mod memory;
mod tracing_sink;

pub use memory::{MemorySink, Record};
pub use tracing_sink::TracingSink;
