use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` once the command ran to completion
/// - `Err` if the command fails (missing plugin directory, bad config, I/O error)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
