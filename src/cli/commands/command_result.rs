use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{ExtractionStats, FileWarning};
use crate::output::GeneratedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Extract,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    /// The default configuration file was written.
    Init,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub plugin_path: PathBuf,
    pub output_dir: PathBuf,
    /// True if settings came from a config file, false if defaults were used.
    pub config_from_file: bool,
    pub prefix: String,
    pub lang: String,
    pub stats: ExtractionStats,
    pub existing_loc_count: usize,
    pub files: Vec<GeneratedFile>,
}

/// Result of running an lrloc command
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Source files or directory entries that could not be processed.
    pub warnings: Vec<FileWarning>,
}

impl CommandResult {
    /// Exit status for a command that ran to completion.
    pub fn exit_status(&self) -> ExitStatus {
        if self.warnings.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
