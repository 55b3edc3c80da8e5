//! Console output for command results.
//!
//! The run summary goes to stdout, warnings about skipped files to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::FileWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const LABEL_WIDTH: usize = 26;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_skipped_warning_to(&result.warnings, verbose, &mut io::stderr().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, writer),
        CommandSummary::Init => print_init(writer),
    }
}

fn print_init<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let stats = &summary.stats;

    let _ = writeln!(writer, "{}", "Extraction summary".bold());
    let _ = writeln!(writer, "  {}{}", label("Plugin"), summary.plugin_path.display());
    let _ = writeln!(writer, "  {}{}", label("Prefix"), summary.prefix);
    let _ = writeln!(writer, "  {}{}", label("Language"), summary.lang);
    if verbose {
        let source = if summary.config_from_file {
            CONFIG_FILE_NAME
        } else {
            "defaults"
        };
        let _ = writeln!(writer, "  {}{}", label("Configuration"), source);
    }
    let _ = writeln!(writer);

    for (name, value) in [
        ("Files processed", stats.files_processed),
        ("Files with strings", stats.files_with_strings),
        ("Strings found", stats.total_strings),
        ("Unique keys", stats.unique_strings),
        ("Existing LOC keys", summary.existing_loc_count),
        ("Log lines ignored", stats.log_lines_ignored),
        ("Technical strings ignored", stats.technical_ignored),
        ("Strings with spacing", stats.strings_with_spacing),
        ("Strings with suffix", stats.strings_with_suffix),
        ("Concatenated lines", stats.concatenated_lines),
        ("Concatenation members", stats.concat_members_total),
        ("Multi-line statements", stats.multiline_statements),
    ] {
        let _ = writeln!(writer, "  {}{}", label(name), value);
    }

    if verbose && !stats.patterns_found.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", "Patterns".bold());
        for (pattern, count) in stats.patterns_by_count() {
            let _ = writeln!(writer, "  {}{}", label(pattern), count);
        }
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        "Output:".bold(),
        summary.output_dir.display()
    );
    for file in &summary.files {
        let _ = writeln!(
            writer,
            "  {} {} ({})",
            SUCCESS_MARK.green(),
            file.name,
            file.detail.dimmed()
        );
    }
}

/// Print a warning about files that could not be read.
///
/// With `verbose`, every file was already reported while scanning, so only
/// the count is repeated as a failure line.
pub fn print_skipped_warning_to<W: Write>(warnings: &[FileWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped",
            FAILURE_MARK.red(),
            warnings.len()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// `name` padded to the label column, followed by `: `.
fn label(name: &str) -> String {
    let fill = LABEL_WIDTH.saturating_sub(UnicodeWidthStr::width(name));
    format!("{}{}: ", name, " ".repeat(fill))
}
