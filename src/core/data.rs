//! Records produced by an extraction run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Pattern name attributed to literals already bound to a key in source.
pub const EXISTING_LOC_PATTERN: &str = "existing_loc";

/// One surfaced literal.
///
/// Immutable once built by the engine. `line_num` is always the physical
/// (1-based) line the literal sits on, even when it was found inside an
/// accumulated multi-line statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    /// The literal exactly as written between the quotes.
    pub original_text: String,
    /// `original_text` without leading/trailing spaces (suffix retained).
    pub clean_text: String,
    /// Canonical translatable text: no spaces, no known suffix.
    pub base_text: String,
    /// Path relative to the scanned root, `/`-separated.
    pub file_path: String,
    pub file_name: String,
    pub line_num: usize,
    /// The physical source line, trimmed.
    pub line_content: String,
    pub pattern_name: String,
    pub suggested_key: String,
    pub leading_spaces: usize,
    pub trailing_spaces: usize,
    pub suffix: String,
    /// Advisory rewrite expression (empty for existing bindings).
    pub replacement_code: String,
    pub concat: Option<ConcatMembership>,
}

/// Position of a literal inside a multi-part concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcatMembership {
    pub index: usize,
    pub total: usize,
}

impl ExtractedString {
    pub fn has_spacing(&self) -> bool {
        self.leading_spaces > 0 || self.trailing_spaces > 0
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    pub fn is_concat_member(&self) -> bool {
        self.concat.is_some()
    }

    pub fn is_existing_loc(&self) -> bool {
        self.pattern_name == EXISTING_LOC_PATTERN
    }

    /// Index in the concatenation group (0 for standalone literals).
    pub fn concat_member_index(&self) -> usize {
        self.concat.map_or(0, |c| c.index)
    }

    /// Number of members in the concatenation group (1 for standalone literals).
    pub fn concat_total_members(&self) -> usize {
        self.concat.map_or(1, |c| c.total)
    }

    /// Category segment of the key: the third `/`-separated part, or `General`.
    pub fn key_category(&self) -> &str {
        self.suggested_key.split('/').nth(2).unwrap_or("General")
    }

    /// Spacing markers used by the report and the key list.
    pub fn spacing_marker(&self) -> &'static str {
        spacing_marker(self.leading_spaces, self.trailing_spaces)
    }

    pub fn suffix_marker(&self) -> &'static str {
        if self.has_suffix() { "🔚" } else { "" }
    }

    pub fn concat_marker(&self) -> &'static str {
        if self.is_concat_member() { "🔗" } else { "" }
    }
}

pub fn spacing_marker(leading: usize, trailing: usize) -> &'static str {
    match (leading > 0, trailing > 0) {
        (true, true) => "⬅️➡️",
        (true, false) => "⬅️",
        (false, true) => "➡️",
        (false, false) => "",
    }
}

/// Counters accumulated across one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub files_processed: usize,
    pub files_with_strings: usize,
    pub total_strings: usize,
    pub unique_strings: usize,
    pub log_lines_ignored: usize,
    pub technical_ignored: usize,
    pub strings_with_spacing: usize,
    pub strings_with_suffix: usize,
    pub concatenated_lines: usize,
    pub concat_members_total: usize,
    pub multiline_statements: usize,
    pub patterns_found: BTreeMap<String, usize>,
}

impl ExtractionStats {
    pub fn record_pattern(&mut self, pattern: &str) {
        *self.patterns_found.entry(pattern.to_string()).or_default() += 1;
    }

    /// Pattern histogram sorted by descending count, then name.
    pub fn patterns_by_count(&self) -> Vec<(&str, usize)> {
        let mut patterns: Vec<_> = self
            .patterns_found
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        patterns.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        patterns
    }
}

/// Formatting side-table entry, keyed by assigned key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpacingMetadata {
    pub original_text: String,
    pub clean_text: String,
    pub base_text: String,
    pub leading_spaces: usize,
    pub trailing_spaces: usize,
    pub suffix: String,
    pub is_concat_member: bool,
    pub concat_index: usize,
    pub file: String,
    pub line: usize,
    pub pattern: String,
}

impl From<&ExtractedString> for SpacingMetadata {
    fn from(entry: &ExtractedString) -> Self {
        Self {
            original_text: entry.original_text.clone(),
            clean_text: entry.clean_text.clone(),
            base_text: entry.base_text.clone(),
            leading_spaces: entry.leading_spaces,
            trailing_spaces: entry.trailing_spaces,
            suffix: entry.suffix.clone(),
            is_concat_member: entry.is_concat_member(),
            concat_index: entry.concat_member_index(),
            file: entry.file_path.clone(),
            line: entry.line_num,
            pattern: entry.pattern_name.clone(),
        }
    }
}

/// A source file (or walk entry) that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWarning {
    pub file_path: String,
    pub error: String,
}

/// Everything an extraction run hands to the emitters.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub entries: Vec<ExtractedString>,
    pub stats: ExtractionStats,
    pub spacing_metadata: BTreeMap<String, SpacingMetadata>,
    pub text_to_key: BTreeMap<String, String>,
    pub warnings: Vec<FileWarning>,
}

impl ExtractionResult {
    pub fn existing_loc_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_existing_loc()).count()
    }
}
