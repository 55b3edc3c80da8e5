use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Local;
use colored::Colorize;

use super::super::args::ExtractCommand;
use super::{CommandKind, CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::Extractor,
    output::{self, OutputContext},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let plugin_path = args.plugin_path.clone();
    if !plugin_path.is_dir() {
        bail!("Plugin directory not found: {}", plugin_path.display());
    }

    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&plugin_path)?;
    args.apply_to(&mut config);
    config.validate()?;

    if !from_file && args.verbose {
        eprintln!(
            "{} no {} found, using default configuration",
            "note:".bold().cyan(),
            CONFIG_FILE_NAME
        );
    }

    let generated = Local::now().naive_local();
    let output_root = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.as_ref().map(|dir| plugin_path.join(dir)));
    let output_dir = output::output_dir(&plugin_path, output_root.as_deref(), &generated);

    let result = Extractor::new(config.extract_options(args.verbose))?.extract_all(&plugin_path)?;

    let plugin_display = display_path(&plugin_path);
    let ctx = OutputContext {
        plugin_path: &plugin_display,
        prefix: &config.prefix,
        lang: &config.lang,
        generated,
    };
    let files = output::write_all(&output_dir, &result, &ctx)?;

    Ok(CommandResult {
        kind: CommandKind::Extract,
        summary: CommandSummary::Extract(ExtractSummary {
            plugin_path,
            output_dir,
            config_from_file: from_file,
            prefix: config.prefix.clone(),
            lang: config.lang.clone(),
            existing_loc_count: result.existing_loc_count(),
            stats: result.stats,
            files,
        }),
        warnings: result.warnings,
    })
}

/// Absolute form of `path` when it can be resolved, as written otherwise.
fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .into_owned()
}
