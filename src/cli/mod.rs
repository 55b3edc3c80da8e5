//! Command-line interface layer.
//!
//! Separate from `core` and `output` so that lrloc can be used as a library.

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, ExtractArgs, ExtractCommand};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
