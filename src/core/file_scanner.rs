use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::data::FileWarning;
use crate::core::patterns::DEFAULT_EXCLUDED_FILES;
use crate::output::I18N_KIT_DIR;

/// Result of scanning a plugin directory.
pub struct ScanResult {
    /// Source files in sorted order.
    pub files: Vec<PathBuf>,
    pub warnings: Vec<FileWarning>,
}

/// What to scan and what to leave out.
#[derive(Debug, Clone)]
pub struct ScanOptions<'a> {
    pub extensions: &'a [String],
    pub exclude_files: &'a [String],
    pub ignore_patterns: &'a [String],
    pub verbose: bool,
}

pub fn scan_files(base_dir: &Path, options: &ScanOptions) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut warnings: Vec<FileWarning> = Vec::new();

    let excluded: HashSet<&str> = DEFAULT_EXCLUDED_FILES
        .iter()
        .copied()
        .chain(options.exclude_files.iter().map(String::as_str))
        .collect();

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in options.ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if options.verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let walker = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != I18N_KIT_DIR);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                warnings.push(FileWarning {
                    file_path: e
                        .path()
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, options.extensions) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if excluded.contains(file_name.as_ref()) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    ScanResult { files, warnings }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn lua() -> Vec<String> {
        vec!["lua".to_string()]
    }

    fn names(result: &ScanResult, base: &Path) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| f.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_scan_lua_files_sorted() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        File::create(base.join("PWUploadTask.lua")).unwrap();
        File::create(base.join("Info.lua")).unwrap();
        File::create(base.join("README.md")).unwrap();
        fs::create_dir(base.join("lib")).unwrap();
        File::create(base.join("lib").join("Dialogs.lua")).unwrap();

        let extensions = lua();
        let options = ScanOptions {
            extensions: &extensions,
            exclude_files: &[],
            ignore_patterns: &[],
            verbose: false,
        };
        let result = scan_files(base, &options);

        assert_eq!(
            names(&result, base),
            vec!["Info.lua", "PWUploadTask.lua", "lib/Dialogs.lua"]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_excludes_default_and_named_files() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        File::create(base.join("JSON.lua")).unwrap();
        File::create(base.join("Vendor.lua")).unwrap();
        File::create(base.join("Main.lua")).unwrap();

        let extensions = lua();
        let exclude = vec!["Vendor.lua".to_string()];
        let options = ScanOptions {
            extensions: &extensions,
            exclude_files: &exclude,
            ignore_patterns: &[],
            verbose: false,
        };
        let result = scan_files(base, &options);

        assert_eq!(names(&result, base), vec!["Main.lua"]);
    }

    #[test]
    fn test_scan_skips_output_dir_and_ignored_globs() {
        let dir = tempdir().unwrap();
        let base = dir.path();

        let kit = base.join(I18N_KIT_DIR).join("Extractor");
        fs::create_dir_all(&kit).unwrap();
        File::create(kit.join("Backup.lua")).unwrap();
        fs::create_dir(base.join("tests")).unwrap();
        File::create(base.join("tests").join("Spec.lua")).unwrap();
        File::create(base.join("Main.lua")).unwrap();

        let extensions = lua();
        let ignores = vec!["tests/**".to_string()];
        let options = ScanOptions {
            extensions: &extensions,
            exclude_files: &[],
            ignore_patterns: &ignores,
            verbose: false,
        };
        let result = scan_files(base, &options);

        assert_eq!(names(&result, base), vec!["Main.lua"]);
    }
}
