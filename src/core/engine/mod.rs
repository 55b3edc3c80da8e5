//! The extraction engine.
//!
//! Per physical line, in order:
//! 1. comment lines are skipped,
//! 2. existing `LOC "$$$/Key=Value"` bindings are recorded as passthrough
//!    `existing_loc` entries,
//! 3. log lines are counted and skipped,
//! 4. lines without a UI-context trigger are skipped,
//! 5. lines that leave a statement open go to the [`Accumulator`],
//! 6. the remaining literals are classified, analyzed, keyed and recorded.
//!
//! All run state (used keys, text-to-key map, dedup set, spacing side-table,
//! stats) is owned by one [`Extractor`] for the duration of a run so that
//! keys stay unique across files.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Component, Path},
};

use anyhow::{Result, bail};
use colored::Colorize;

use crate::core::{
    accumulator::{Accumulator, Statement},
    classify::Classifier,
    data::{
        ConcatMembership, EXISTING_LOC_PATTERN, ExtractedString, ExtractionResult,
        ExtractionStats, FileWarning, SpacingMetadata,
    },
    file_scanner::{ScanOptions, scan_files},
    key_gen::KeyGenerator,
    patterns::{
        KEY_NAMESPACE, LITERAL_REGEX, LOC_BINDING_REGEX, LOG_LINE_REGEX, is_ignored_binding,
        match_ui_context,
    },
    replacement::loc_expression,
    spacing,
};
use crate::utils::{COMMENT_MARKER, has_concat_operator};


/// Run parameters.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub prefix: String,
    /// Literals shorter than this (after trimming) are never extracted.
    pub min_length: usize,
    pub ignore_log: bool,
    pub extensions: Vec<String>,
    pub exclude_files: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub category_strip: Vec<String>,
    pub technical_context_patterns: Vec<String>,
    pub technical_context_triggers: Vec<String>,
    pub verbose: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        crate::config::Config::default().extract_options(false)
    }
}

/// Per-file bookkeeping.
struct FileScan {
    file_path: String,
    file_name: String,
    has_strings: bool,
}

pub struct Extractor {
    options: ExtractOptions,
    classifier: Classifier,
    keys: KeyGenerator,
    entries: Vec<ExtractedString>,
    stats: ExtractionStats,
    used_keys: HashSet<String>,
    text_to_key: BTreeMap<String, String>,
    seen_texts: HashSet<(String, usize, String)>,
    spacing_metadata: BTreeMap<String, SpacingMetadata>,
    warnings: Vec<FileWarning>,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Result<Self> {
        let classifier = Classifier::new(
            &options.ignore_texts,
            &options.technical_context_patterns,
            &options.technical_context_triggers,
        )?;
        let keys = KeyGenerator::new(options.prefix.clone(), &options.category_strip);
        Ok(Self {
            options,
            classifier,
            keys,
            entries: Vec::new(),
            stats: ExtractionStats::default(),
            used_keys: HashSet::new(),
            text_to_key: BTreeMap::new(),
            seen_texts: HashSet::new(),
            spacing_metadata: BTreeMap::new(),
            warnings: Vec::new(),
        })
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Extract every source file under `root`.
    ///
    /// All files are read first so that keys bound anywhere in the tree are
    /// reserved before new keys are minted. Unreadable files are reported
    /// as warnings and skipped.
    pub fn extract_all(mut self, root: &Path) -> Result<ExtractionResult> {
        if !root.is_dir() {
            bail!("Plugin directory not found: {}", root.display());
        }

        let scan = scan_files(
            root,
            &ScanOptions {
                extensions: &self.options.extensions,
                exclude_files: &self.options.exclude_files,
                ignore_patterns: &self.options.ignores,
                verbose: self.options.verbose,
            },
        );
        self.warnings.extend(scan.warnings);

        let mut sources: Vec<(String, String)> = Vec::with_capacity(scan.files.len());
        for path in &scan.files {
            let file_path = relative_path(root, path);
            if let Some(content) = self.read_source(&file_path, path) {
                self.reserve_existing_keys(&content);
                sources.push((file_path, content));
            }
        }

        for (file_path, content) in &sources {
            self.extract_source(file_path, content);
        }

        Ok(self.finish())
    }

    /// Extract a single file, reporting it relative to `root`.
    pub fn extract_file(&mut self, root: &Path, path: &Path) -> Vec<ExtractedString> {
        let file_path = relative_path(root, path);
        match self.read_source(&file_path, path) {
            Some(content) => {
                self.reserve_existing_keys(&content);
                self.extract_source(&file_path, &content)
            }
            None => Vec::new(),
        }
    }

    /// Extract from in-memory source. `file_path` is the reported path; its
    /// last component names the key category.
    pub fn extract_source(&mut self, file_path: &str, content: &str) -> Vec<ExtractedString> {
        let first_new = self.entries.len();
        self.stats.files_processed += 1;

        let mut scan = FileScan {
            file_path: file_path.to_string(),
            file_name: file_path.rsplit('/').next().unwrap_or(file_path).to_string(),
            has_strings: false,
        };
        let mut accumulator = Accumulator::new();

        for (index, raw) in content.lines().enumerate() {
            let line_num = index + 1;

            if accumulator.is_accumulating() {
                if is_comment(raw) {
                    continue;
                }
                if let Some(statement) = accumulator.feed(line_num, raw) {
                    self.process_statement(&mut scan, &statement);
                }
                continue;
            }

            self.scan_line(&mut scan, &mut accumulator, line_num, raw);
        }

        if let Some(statement) = accumulator.finish() {
            self.process_statement(&mut scan, &statement);
        }

        if scan.has_strings {
            self.stats.files_with_strings += 1;
        }

        self.entries[first_new..].to_vec()
    }

    /// Close the run and hand over everything collected.
    pub fn finish(mut self) -> ExtractionResult {
        self.stats.unique_strings = self.used_keys.len();
        ExtractionResult {
            entries: self.entries,
            stats: self.stats,
            spacing_metadata: self.spacing_metadata,
            text_to_key: self.text_to_key,
            warnings: self.warnings,
        }
    }

    fn read_source(&mut self, file_path: &str, path: &Path) -> Option<String> {
        match fs::read(path) {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                if self.options.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        file_path,
                        e
                    );
                }
                self.warnings.push(FileWarning {
                    file_path: file_path.to_string(),
                    error: e.to_string(),
                });
                None
            }
        }
    }

    /// Register keys already bound in source so minted keys never reuse them.
    fn reserve_existing_keys(&mut self, content: &str) {
        for line in content.lines().filter(|l| !is_comment(l)) {
            for caps in LOC_BINDING_REGEX.captures_iter(line) {
                if !is_ignored_binding(&caps[1], &caps[2]) {
                    self.used_keys.insert(caps[1].to_string());
                }
            }
        }
    }

    fn scan_line(
        &mut self,
        scan: &mut FileScan,
        accumulator: &mut Accumulator,
        line_num: usize,
        raw: &str,
    ) {
        if is_comment(raw) {
            return;
        }

        if self.options.ignore_log && LOG_LINE_REGEX.is_match(raw) {
            self.record_bindings(scan, raw, &Statement::single(EXISTING_LOC_PATTERN, line_num, raw));
            self.stats.log_lines_ignored += 1;
            return;
        }

        let Some(pattern_name) = match_ui_context(raw) else {
            self.record_bindings(scan, raw, &Statement::single(EXISTING_LOC_PATTERN, line_num, raw));
            return;
        };

        if Accumulator::opens_statement(raw) {
            accumulator.begin(pattern_name, line_num, raw);
            return;
        }

        self.process_statement(scan, &Statement::single(pattern_name, line_num, raw));
    }

    /// Extract every literal of one logical statement.
    fn process_statement(&mut self, scan: &mut FileScan, statement: &Statement) {
        if statement.is_multiline() {
            self.stats.multiline_statements += 1;
        }

        let text = statement.combined_text();
        let bound_values = self.record_bindings(scan, &text, statement);

        let literals: Vec<&str> = LITERAL_REGEX
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|literal| {
                bound_values.is_empty()
                    || (!literal.starts_with(KEY_NAMESPACE)
                        && !bound_values.iter().any(|v| v == literal))
            })
            .collect();
        if literals.is_empty() {
            return;
        }

        let concat_operator = has_concat_operator(&text) && literals.len() > 1;
        let line_context = self
            .classifier
            .applies_context(statement.pattern_name)
            .then_some(text.as_str());

        let mut members: Vec<&str> = Vec::new();
        for literal in literals {
            if literal.trim().chars().count() < self.options.min_length {
                continue;
            }
            if self.classifier.is_technical(literal, line_context) {
                self.stats.technical_ignored += 1;
                continue;
            }
            members.push(literal);
        }
        if members.is_empty() {
            return;
        }

        let is_group = concat_operator && members.len() > 1;
        if is_group {
            self.stats.concatenated_lines += 1;
            self.stats.concat_members_total += members.len();
        }

        let total = members.len();
        for (index, literal) in members.into_iter().enumerate() {
            let concat = is_group.then_some(ConcatMembership { index, total });
            self.record_literal(scan, statement, literal, concat);
        }
    }

    /// Record `existing_loc` entries for every binding in `text`.
    ///
    /// Returns the bound default values, including those of ignored
    /// bindings, so the caller can leave them out of extraction.
    fn record_bindings(
        &mut self,
        scan: &FileScan,
        text: &str,
        statement: &Statement,
    ) -> Vec<String> {
        let mut bound_values = Vec::new();

        for caps in LOC_BINDING_REGEX.captures_iter(text) {
            let key = &caps[1];
            let value = &caps[2];
            bound_values.push(value.to_string());

            if is_ignored_binding(key, value) {
                self.stats.technical_ignored += 1;
                continue;
            }

            let physical = statement.locate(&format!("{}={}", key, value));
            self.used_keys.insert(key.to_string());
            self.text_to_key
                .entry(value.to_string())
                .or_insert_with(|| key.to_string());
            self.stats.total_strings += 1;
            self.entries.push(ExtractedString {
                original_text: value.to_string(),
                clean_text: value.to_string(),
                base_text: value.to_string(),
                file_path: scan.file_path.clone(),
                file_name: scan.file_name.clone(),
                line_num: physical.line_num,
                line_content: physical.raw.trim().to_string(),
                pattern_name: EXISTING_LOC_PATTERN.to_string(),
                suggested_key: key.to_string(),
                leading_spaces: 0,
                trailing_spaces: 0,
                suffix: String::new(),
                replacement_code: String::new(),
                concat: None,
            });
        }

        bound_values
    }

    fn record_literal(
        &mut self,
        scan: &mut FileScan,
        statement: &Statement,
        literal: &str,
        concat: Option<ConcatMembership>,
    ) {
        let formatting = spacing::analyze(literal);

        let key = match self.text_to_key.get(&formatting.base_text).cloned() {
            Some(key) => key,
            None => {
                let Some(key) =
                    self.keys
                        .generate(&formatting.base_text, &scan.file_name, &self.used_keys)
                else {
                    return;
                };
                self.used_keys.insert(key.clone());
                self.text_to_key
                    .insert(formatting.base_text.clone(), key.clone());
                key
            }
        };

        let physical = statement.locate(literal);
        let entry = ExtractedString {
            original_text: literal.to_string(),
            replacement_code: loc_expression(
                &key,
                &formatting.base_text,
                formatting.leading_spaces,
                formatting.trailing_spaces,
                &formatting.suffix,
            ),
            clean_text: formatting.clean_text,
            base_text: formatting.base_text,
            file_path: scan.file_path.clone(),
            file_name: scan.file_name.clone(),
            line_num: physical.line_num,
            line_content: physical.raw.trim().to_string(),
            pattern_name: statement.pattern_name.to_string(),
            suggested_key: key,
            leading_spaces: formatting.leading_spaces,
            trailing_spaces: formatting.trailing_spaces,
            suffix: formatting.suffix,
            concat,
        };

        self.stats.total_strings += 1;
        self.stats.record_pattern(statement.pattern_name);
        if entry.has_spacing() {
            self.stats.strings_with_spacing += 1;
        }
        if entry.has_suffix() {
            self.stats.strings_with_suffix += 1;
        }

        let dedup_key = (
            entry.file_path.clone(),
            entry.line_num,
            entry.clean_text.clone(),
        );
        if self.seen_texts.insert(dedup_key) {
            scan.has_strings = true;
            if entry.has_spacing() || entry.has_suffix() || entry.is_concat_member() {
                self.spacing_metadata
                    .insert(entry.suggested_key.clone(), SpacingMetadata::from(&entry));
            }
        }

        self.entries.push(entry);
    }
}

fn is_comment(raw: &str) -> bool {
    raw.trim_start().starts_with(COMMENT_MARKER)
}

/// `/`-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
