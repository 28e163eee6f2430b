//! One module per subcommand. Handlers translate arguments into core calls
//! and render the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod migrate;
pub mod setup;
pub mod validate;
