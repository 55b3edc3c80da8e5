//! `TranslatedStrings_{lang}.txt`: one `"key=base text"` line per unique key,
//! grouped by key category.

use std::collections::BTreeMap;

use crate::core::ExtractedString;
use crate::output::OutputContext;

const RULE_WIDTH: usize = 77;

pub struct KeyFile {
    pub content: String,
    pub total_keys: usize,
}

/// Unique keys in key order; the first entry seen for a key wins.
pub fn unique_keys(entries: &[ExtractedString]) -> BTreeMap<&str, &ExtractedString> {
    let mut unique: BTreeMap<&str, &ExtractedString> = BTreeMap::new();
    for entry in entries {
        unique.entry(entry.suggested_key.as_str()).or_insert(entry);
    }
    unique
}

pub fn render_key_file(entries: &[ExtractedString], ctx: &OutputContext) -> KeyFile {
    let unique = unique_keys(entries);

    let mut by_category: BTreeMap<&str, Vec<&ExtractedString>> = BTreeMap::new();
    for entry in unique.values() {
        by_category.entry(entry.key_category()).or_default().push(entry);
    }

    let rule = format!("-- {}", "=".repeat(RULE_WIDTH));
    let mut out = String::new();
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!(
        "-- Plugin Localization - {}\n",
        ctx.lang.to_uppercase()
    ));
    out.push_str(&format!("-- Generated: {}\n", ctx.generated_display()));
    out.push_str(&format!("-- Total keys: {}\n", unique.len()));
    out.push_str(&format!("{}\n\n", rule));

    // `unique` is key-ordered, so each category list already is too.
    for (category, entries) in &by_category {
        out.push_str(&format!("-- {}\n", category));
        for entry in entries {
            out.push_str(&format!(
                "\"{}={}\"\n",
                entry.suggested_key, entry.base_text
            ));
        }
        out.push('\n');
    }

    KeyFile {
        content: out,
        total_keys: unique.len(),
    }
}
