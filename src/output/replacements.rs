//! `replacements.json`: per file and per line, the original line, the line
//! with every extracted literal rewritten as a `LOC` call, and the members
//! that make up the rewrite. Existing bindings are left out.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{ExtractedString, ExtractionResult, replacement::replaced_line};
use crate::output::OutputContext;

#[derive(Debug, Serialize)]
pub struct ReplacementsDocument<'a> {
    pub generated: String,
    pub plugin_path: &'a str,
    pub prefix: &'a str,
    pub stats: ReplacementStats,
    pub text_to_key: &'a BTreeMap<String, String>,
    pub files: BTreeMap<&'a str, FileReplacements<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReplacementStats {
    /// Every entry, existing bindings included.
    pub total_strings: usize,
    /// Distinct keys among new (non-binding) entries.
    pub unique_keys: usize,
    /// Entries that are concatenation members.
    pub concatenated_lines: usize,
}

#[derive(Debug, Serialize)]
pub struct FileReplacements<'a> {
    pub total_replacements: usize,
    pub replacements: Vec<LineReplacement<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LineReplacement<'a> {
    pub line_num: usize,
    pub pattern: &'a str,
    pub is_concatenated: bool,
    pub original_line: &'a str,
    pub replaced_line: String,
    pub members: Vec<Member<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Member<'a> {
    pub original_text: &'a str,
    pub base_text: &'a str,
    pub loc_key: &'a str,
    pub leading_spaces: usize,
    pub trailing_spaces: usize,
    pub suffix: &'a str,
    pub replacement: &'a str,
}

impl ReplacementsDocument<'_> {
    pub fn total_replacements(&self) -> usize {
        self.files.values().map(|f| f.total_replacements).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize replacements")
    }
}

pub fn build_replacements<'a>(
    result: &'a ExtractionResult,
    ctx: &OutputContext<'a>,
) -> ReplacementsDocument<'a> {
    let mut by_file: BTreeMap<&str, BTreeMap<usize, Vec<&ExtractedString>>> = BTreeMap::new();
    for entry in result.entries.iter().filter(|e| !e.is_existing_loc()) {
        by_file
            .entry(entry.file_path.as_str())
            .or_default()
            .entry(entry.line_num)
            .or_default()
            .push(entry);
    }

    let files = by_file
        .into_iter()
        .map(|(file_path, lines)| {
            let replacements: Vec<LineReplacement> = lines
                .into_iter()
                .map(|(line_num, entries)| line_replacement(line_num, &entries))
                .collect();
            (
                file_path,
                FileReplacements {
                    total_replacements: replacements.len(),
                    replacements,
                },
            )
        })
        .collect();

    let unique_keys: BTreeSet<&str> = result
        .entries
        .iter()
        .filter(|e| !e.is_existing_loc())
        .map(|e| e.suggested_key.as_str())
        .collect();

    ReplacementsDocument {
        generated: ctx.generated_iso(),
        plugin_path: ctx.plugin_path,
        prefix: ctx.prefix,
        stats: ReplacementStats {
            total_strings: result.entries.len(),
            unique_keys: unique_keys.len(),
            concatenated_lines: result
                .entries
                .iter()
                .filter(|e| e.is_concat_member())
                .count(),
        },
        text_to_key: &result.text_to_key,
        files,
    }
}

fn line_replacement<'a>(line_num: usize, entries: &[&'a ExtractedString]) -> LineReplacement<'a> {
    let first = entries[0];
    LineReplacement {
        line_num,
        pattern: &first.pattern_name,
        is_concatenated: first.is_concat_member() && entries.len() > 1,
        original_line: &first.line_content,
        replaced_line: replaced_line(&first.line_content, entries),
        members: entries
            .iter()
            .map(|e| Member {
                original_text: &e.original_text,
                base_text: &e.base_text,
                loc_key: &e.suggested_key,
                leading_spaces: e.leading_spaces,
                trailing_spaces: e.trailing_spaces,
                suffix: &e.suffix,
                replacement: &e.replacement_code,
            })
            .collect(),
    }
}
