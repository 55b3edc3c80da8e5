//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract localizable strings from a Lightroom plugin
//! - `init`: Initialize an lrloc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Plugin directory to scan
    #[arg(default_value = ".")]
    pub plugin_path: PathBuf,

    /// Output root (default: <plugin>/__i18n_kit__/Extractor)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// LOC key prefix (overrides config file)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Language code of the key file (overrides config file)
    #[arg(long)]
    pub lang: Option<String>,

    /// File name to exclude, in addition to the config file's list.
    /// Can be specified multiple times: --exclude Vendor.lua --exclude Old.lua
    #[arg(long = "exclude", value_name = "FILE")]
    pub exclude: Vec<String>,

    /// Minimum literal length after trimming (overrides config file)
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Keep strings found on log lines
    #[arg(long)]
    pub no_ignore_log: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(lang) = &self.lang {
            config.lang = lang.clone();
        }
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if self.no_ignore_log {
            config.ignore_log = false;
        }
        for file in &self.exclude {
            if !config.exclude_files.contains(file) {
                config.exclude_files.push(file.clone());
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hard-coded UI strings and propose LOC keys for them
    Extract(ExtractCommand),
    /// Initialize a new .lrlocrc.json configuration file
    Init,
}
