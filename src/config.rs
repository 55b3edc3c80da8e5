use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{
    ExtractOptions, classify::DEFAULT_CONTEXT_TRIGGERS, key_gen::DEFAULT_CATEGORY_STRIP,
};

pub const CONFIG_FILE_NAME: &str = ".lrlocrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_ignore_log")]
    pub ignore_log: bool,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub exclude_files: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_category_strip_prefixes")]
    pub category_strip_prefixes: Vec<String>,
    #[serde(default)]
    pub technical_context_patterns: Vec<String>,
    #[serde(default = "default_technical_context_triggers")]
    pub technical_context_triggers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

fn default_prefix() -> String {
    "$$$/Piwigo".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_min_length() -> usize {
    3
}

fn default_ignore_log() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["lua".to_string()]
}

fn default_category_strip_prefixes() -> Vec<String> {
    DEFAULT_CATEGORY_STRIP.iter().map(|s| s.to_string()).collect()
}

fn default_technical_context_triggers() -> Vec<String> {
    DEFAULT_CONTEXT_TRIGGERS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            lang: default_lang(),
            min_length: default_min_length(),
            ignore_log: default_ignore_log(),
            extensions: default_extensions(),
            exclude_files: Vec::new(),
            ignores: Vec::new(),
            ignore_texts: Vec::new(),
            category_strip_prefixes: default_category_strip_prefixes(),
            technical_context_patterns: Vec::new(),
            technical_context_triggers: default_technical_context_triggers(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or any regex in
    /// `technicalContextPatterns` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.technical_context_patterns {
            Regex::new(pattern).with_context(|| {
                format!(
                    "Invalid regex in 'technicalContextPatterns': \"{}\"",
                    pattern
                )
            })?;
        }

        Ok(())
    }

    /// Engine parameters for this configuration.
    pub fn extract_options(&self, verbose: bool) -> ExtractOptions {
        ExtractOptions {
            prefix: self.prefix.clone(),
            min_length: self.min_length,
            ignore_log: self.ignore_log,
            extensions: self.extensions.clone(),
            exclude_files: self.exclude_files.clone(),
            ignores: self.ignores.clone(),
            ignore_texts: self.ignore_texts.clone(),
            category_strip: self.category_strip_prefixes.clone(),
            technical_context_patterns: self.technical_context_patterns.clone(),
            technical_context_triggers: self.technical_context_triggers.clone(),
            verbose,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
