//! Output artefacts of an extraction run.
//!
//! Everything is written into one timestamped directory:
//! `<plugin>/__i18n_kit__/Extractor/<YYYYMMDD_HHMMSS>/` by default, or
//! `<output-dir>/<YYYYMMDD_HHMMSS>/` when an output root is given.

pub mod key_file;
pub mod replacements;
pub mod report;
pub mod spacing_metadata;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::core::ExtractionResult;

/// Per-plugin directory holding the output of every localisation tool.
pub const I18N_KIT_DIR: &str = "__i18n_kit__";

/// Sub-directory of [`I18N_KIT_DIR`] used by this tool.
pub const TOOL_NAME: &str = "Extractor";

pub const REPLACEMENTS_FILE: &str = "replacements.json";
pub const SPACING_METADATA_FILE: &str = "spacing_metadata.json";
pub const REPORT_FILE: &str = "extraction_report.txt";

/// `TranslatedStrings_{lang}.txt`
pub fn key_file_name(lang: &str) -> String {
    format!("TranslatedStrings_{}.txt", lang)
}

/// Run facts shared by every emitter.
#[derive(Debug, Clone)]
pub struct OutputContext<'a> {
    pub plugin_path: &'a str,
    pub prefix: &'a str,
    pub lang: &'a str,
    pub generated: NaiveDateTime,
}

impl OutputContext<'_> {
    /// `2026-01-27 14:03:59`, used in text headers.
    pub fn generated_display(&self) -> String {
        self.generated.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// `2026-01-27T14:03:59`, used in JSON documents.
    pub fn generated_iso(&self) -> String {
        self.generated.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// A file written by [`write_all`], with a short description of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub detail: String,
}

/// Directory name for a run started at `generated`.
pub fn timestamp_dir_name(generated: &NaiveDateTime) -> String {
    generated.format("%Y%m%d_%H%M%S").to_string()
}

/// Timestamped output directory for a run. Not created.
pub fn output_dir(
    plugin_root: &Path,
    output_root: Option<&Path>,
    generated: &NaiveDateTime,
) -> PathBuf {
    let base = match output_root {
        Some(root) => root.to_path_buf(),
        None => plugin_root.join(I18N_KIT_DIR).join(TOOL_NAME),
    };
    base.join(timestamp_dir_name(generated))
}

/// Render and write the four artefacts into `dir`, creating it if needed.
pub fn write_all(
    dir: &Path,
    result: &ExtractionResult,
    ctx: &OutputContext,
) -> Result<Vec<GeneratedFile>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let key_file = key_file::render_key_file(&result.entries, ctx);
    let key_file_name = key_file_name(ctx.lang);
    write_file(&dir.join(&key_file_name), &key_file.content)?;

    let spacing = spacing_metadata::render_spacing_metadata(result, ctx)?;
    write_file(&dir.join(SPACING_METADATA_FILE), &spacing)?;

    let replacements = replacements::build_replacements(result, ctx);
    let replacement_lines = replacements.total_replacements();
    write_file(&dir.join(REPLACEMENTS_FILE), &replacements.to_json()?)?;

    write_file(&dir.join(REPORT_FILE), &report::render_report(result, ctx))?;

    Ok(vec![
        GeneratedFile {
            name: key_file_name,
            detail: format!("{} keys", key_file.total_keys),
        },
        GeneratedFile {
            name: SPACING_METADATA_FILE.to_string(),
            detail: format!("{} entries", result.spacing_metadata.len()),
        },
        GeneratedFile {
            name: REPLACEMENTS_FILE.to_string(),
            detail: format!("{} lines to rewrite", replacement_lines),
        },
        GeneratedFile {
            name: REPORT_FILE.to_string(),
            detail: "detailed report".to_string(),
        },
    ])
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::core::{ExtractOptions, Extractor};
    use crate::output::*;

    pub(crate) fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 27)
            .unwrap()
            .and_hms_opt(14, 3, 59)
            .unwrap()
    }

    #[test]
    fn test_output_dir_defaults_inside_plugin() {
        let dir = output_dir(Path::new("/plugins/x.lrplugin"), None, &fixed_time());
        assert_eq!(
            dir,
            PathBuf::from("/plugins/x.lrplugin/__i18n_kit__/Extractor/20260127_140359")
        );
    }

    #[test]
    fn test_output_dir_override() {
        let dir = output_dir(
            Path::new("/plugins/x.lrplugin"),
            Some(Path::new("/tmp/out")),
            &fixed_time(),
        );
        assert_eq!(dir, PathBuf::from("/tmp/out/20260127_140359"));
    }

    #[test]
    fn test_write_all_creates_every_artefact() {
        let dir = tempdir().unwrap();
        let mut extractor = Extractor::new(ExtractOptions::default()).unwrap();
        extractor.extract_source("PWDialogs.lua", r#"title = "Upload settings - ""#);
        let result = extractor.finish();
        let ctx = OutputContext {
            plugin_path: "plugin",
            prefix: "$$$/Piwigo",
            lang: "fr",
            generated: fixed_time(),
        };

        let out = dir.path().join("run");
        let files = write_all(&out, &result, &ctx).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "TranslatedStrings_fr.txt",
                "spacing_metadata.json",
                "replacements.json",
                "extraction_report.txt"
            ]
        );
        for name in names {
            assert!(out.join(name).is_file(), "{} missing", name);
        }
        assert_eq!(files[0].detail, "1 keys");
        assert_eq!(files[2].detail, "1 lines to rewrite");
    }
}
