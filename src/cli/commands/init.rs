use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandKind, CommandResult, CommandSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into `dir`.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;

    Ok(CommandResult {
        kind: CommandKind::Init,
        summary: CommandSummary::Init,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::cli::commands::init::*;
    use crate::config::load_config;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();

        let loaded = load_config(dir.path()).unwrap();
        assert!(loaded.from_file);
        assert_eq!(loaded.config.prefix, "$$$/Piwigo");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let err = init(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(),
            "{}"
        );
    }
}
