//! CLI module for blogdeck.
//!
//! - Argument parsing
//! - Version and help display
//! - The `serve` command running the fixture API server
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use blogdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, ServeOptions, TuiOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::{ENV_LOG_FILTER, DEFAULT_LOG_FILTER};
use crate::logging;
use crate::server;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Serve(options) => Some(handle_serve_command(options)),
        CliCommand::RunTui(_) => None,
    }
}

/// Run the fixture server until Ctrl+C.
fn handle_serve_command(options: &ServeOptions) -> Result<()> {
    let filter = std::env::var(ENV_LOG_FILTER).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    logging::init_stderr_logging(&filter)?;

    let store = match &options.data {
        Some(path) => server::Store::load(path)?,
        None => server::Store::default(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(options.port, store))
}
