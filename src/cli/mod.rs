pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, run_command};
pub use output::error_message;
