pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod shell;

pub use cli::{Cli, Commands};
pub use config::{create_example_config, LaunchpadConfig};
pub use error::{LaunchpadError, LaunchpadResult};
pub use shell::Shell;
