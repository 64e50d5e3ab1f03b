//! Command dispatch: bridges CLI args -> validation -> output formatting.

pub mod batch;
pub mod bytes;
pub mod config_cmd;
pub mod endpoints;
pub mod util;
pub mod validate;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a settings-bound command to the appropriate handler.
pub fn dispatch(cmd: &Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Validate(args) => validate::handle(args, settings),
        Command::Batch(args) => batch::handle(args, settings),
        Command::Endpoints => endpoints::handle(settings),
        Command::Bytes(args) => bytes::handle(args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
