//! `extraction_report.txt`: the human-readable account of a run, laid out
//! for someone applying the replacements by hand.

use std::collections::BTreeMap;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{ExtractedString, ExtractionResult, data::spacing_marker};
use crate::output::{OutputContext, key_file::unique_keys};

const WIDTH: usize = 80;
const PATTERN_COLUMN: usize = 25;
const MAX_LINE_DISPLAY: usize = 100;

pub fn render_report(result: &ExtractionResult, ctx: &OutputContext) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    out.push_str(&format!("{heavy}\nLOCALIZABLE STRING EXTRACTION REPORT\n{heavy}\n\n"));
    out.push_str(&format!("Date: {}\n", ctx.generated_display()));
    out.push_str(&format!("Plugin: {}\n", ctx.plugin_path));
    out.push_str(&format!("Prefix: {}\n\n", ctx.prefix));

    out.push_str("LEGEND:\n");
    out.push_str("  ⬅️   = leading space(s)\n");
    out.push_str("  ➡️   = trailing space(s)\n");
    out.push_str("  ⬅️➡️ = spaces on both sides\n");
    out.push_str("  🔚  = suffix detected (\" - \", \" -\", \"...\")\n");
    out.push_str("  🔗  = member of a concatenated string\n\n");

    write_stats(&mut out, result, &light);
    write_patterns(&mut out, result, &light);
    write_existing(&mut out, result, &heavy);
    write_files(&mut out, result, &heavy, &light);
    write_spacing(&mut out, result, &heavy);
    write_key_list(&mut out, result, &heavy);

    out
}

fn write_stats(out: &mut String, result: &ExtractionResult, light: &str) {
    let stats = &result.stats;
    out.push_str(&format!("STATISTICS\n{light}\n"));
    for (label, value) in [
        ("Files processed", stats.files_processed),
        ("Files with strings", stats.files_with_strings),
        ("Strings found", stats.total_strings),
        ("Unique keys", stats.unique_strings),
        ("Log lines ignored", stats.log_lines_ignored),
        ("Technical strings ignored", stats.technical_ignored),
        ("Strings with spacing", stats.strings_with_spacing),
        ("Strings with suffix", stats.strings_with_suffix),
        ("Concatenated lines", stats.concatenated_lines),
        ("Concatenation members", stats.concat_members_total),
        ("Multi-line statements", stats.multiline_statements),
    ] {
        out.push_str(&format!("{}: {}\n", pad(label, 26), value));
    }
    out.push_str(&format!(
        "{}: {} (already localized, left unchanged)\n\n",
        pad("Existing LOC keys", 26),
        result.existing_loc_count()
    ));
}

fn write_patterns(out: &mut String, result: &ExtractionResult, light: &str) {
    out.push_str(&format!("PATTERNS FOUND\n{light}\n"));
    for (pattern, count) in result.stats.patterns_by_count() {
        out.push_str(&format!("  {} : {}\n", pad(pattern, PATTERN_COLUMN), count));
    }
    out.push('\n');
}

fn write_existing(out: &mut String, result: &ExtractionResult, heavy: &str) {
    let existing: Vec<&ExtractedString> =
        result.entries.iter().filter(|e| e.is_existing_loc()).collect();
    if existing.is_empty() {
        return;
    }

    out.push_str(&format!(
        "{heavy}\nEXISTING LOC KEYS (already localized, included in the key file)\n{heavy}\n\n"
    ));
    for entry in existing {
        out.push_str(&format!("  🔒 {}:{}\n", entry.file_path, entry.line_num));
        out.push_str(&format!("     Key   : {}\n", entry.suggested_key));
        out.push_str(&format!("     Value : {}\n\n", entry.base_text));
    }
    out.push('\n');
}

fn write_files(out: &mut String, result: &ExtractionResult, heavy: &str, light: &str) {
    out.push_str(&format!("{heavy}\nDETAILS BY FILE (for replacement)\n{heavy}\n"));

    let mut by_file: BTreeMap<&str, Vec<&ExtractedString>> = BTreeMap::new();
    for entry in &result.entries {
        by_file.entry(entry.file_path.as_str()).or_default().push(entry);
    }

    for (file_path, entries) in by_file {
        let mut texts: Vec<&str> = entries.iter().map(|e| e.base_text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();

        out.push_str(&format!("\n{light}\n"));
        out.push_str(&format!("File: {}\n", file_path));
        out.push_str(&format!(
            "Strings: {} ({} unique texts)\n",
            entries.len(),
            texts.len()
        ));
        out.push_str(&format!("{light}\n\n"));

        let mut by_line: BTreeMap<usize, Vec<&ExtractedString>> = BTreeMap::new();
        for entry in entries {
            by_line.entry(entry.line_num).or_default().push(entry);
        }

        for (line_num, line_entries) in by_line {
            let first = line_entries[0];
            if first.is_concat_member() && line_entries.len() > 1 {
                write_concat_line(out, line_num, &line_entries);
            } else {
                for entry in line_entries {
                    write_single(out, line_num, entry);
                }
            }
        }
    }
}

fn write_concat_line(out: &mut String, line_num: usize, entries: &[&ExtractedString]) {
    let first = entries[0];
    out.push_str(&format!(
        "  [Line {}] Pattern: {} 🔗 CONCATENATED STRING ({} members)\n",
        line_num,
        first.pattern_name,
        entries.len()
    ));
    out.push_str(&format!(
        "  LINE     : {}\n",
        truncate(&first.line_content, MAX_LINE_DISPLAY)
    ));

    for (idx, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "\n  MEMBER {} : \"{}\"{}\n",
            idx + 1,
            entry.original_text,
            markers(entry)
        ));
        out.push_str(&format!("    BASE   : \"{}\"\n", entry.base_text));
        out.push_str(&format!("    KEY    : {}\n", entry.suggested_key));
        if entry.has_spacing() {
            out.push_str(&format!(
                "    SPACES : {} leading, {} trailing\n",
                entry.leading_spaces, entry.trailing_spaces
            ));
        }
        if entry.has_suffix() {
            out.push_str(&format!("    SUFFIX : \"{}\"\n", entry.suffix));
        }
    }
    out.push('\n');
}

fn write_single(out: &mut String, line_num: usize, entry: &ExtractedString) {
    out.push_str(&format!(
        "  [Line {}] Pattern: {}{}\n",
        line_num,
        entry.pattern_name,
        markers(entry)
    ));
    out.push_str(&format!("  FIND     : \"{}\"\n", entry.original_text));
    out.push_str(&format!("  BASE     : \"{}\"\n", entry.base_text));
    out.push_str(&format!("  KEY      : {}\n", entry.suggested_key));
    if entry.has_spacing() {
        out.push_str(&format!(
            "  SPACES   : {} leading, {} trailing\n",
            entry.leading_spaces, entry.trailing_spaces
        ));
    }
    if entry.has_suffix() {
        out.push_str(&format!("  SUFFIX   : \"{}\"\n", entry.suffix));
    }
    out.push_str(&format!("  REPLACE  : {}\n\n", entry.replacement_code));
}

fn write_spacing(out: &mut String, result: &ExtractionResult, heavy: &str) {
    if result.spacing_metadata.is_empty() {
        return;
    }

    out.push_str(&format!("{heavy}\nSTRINGS WITH SPACING OR SUFFIXES\n{heavy}\n\n"));
    out.push_str("These strings need their spaces or suffixes re-injected.\n\n");

    for (i, (key, meta)) in result.spacing_metadata.iter().enumerate() {
        let suffix_marker = if meta.suffix.is_empty() { "" } else { "🔚" };
        out.push_str(&format!(
            "  {}. {}{} {}\n",
            i + 1,
            spacing_marker(meta.leading_spaces, meta.trailing_spaces),
            suffix_marker,
            key
        ));
        out.push_str(&format!("     Original: \"{}\"\n", meta.original_text));
        out.push_str(&format!("     Base: \"{}\"\n", meta.base_text));
        if meta.leading_spaces > 0 || meta.trailing_spaces > 0 {
            out.push_str(&format!(
                "     Spaces: {} leading + {} trailing\n",
                meta.leading_spaces, meta.trailing_spaces
            ));
        }
        if !meta.suffix.is_empty() {
            out.push_str(&format!("     Suffix: \"{}\"\n", meta.suffix));
        }
        out.push_str(&format!("     File: {}:{}\n\n", meta.file, meta.line));
    }
}

fn write_key_list(out: &mut String, result: &ExtractionResult, heavy: &str) {
    let unique = unique_keys(&result.entries);

    out.push_str(&format!("{heavy}\nKEY LIST\n{heavy}\n\n"));
    out.push_str(&format!("-- {} unique keys\n\n", unique.len()));
    for (key, entry) in unique {
        out.push_str(&format!("\"{}={}\"{}\n", key, entry.base_text, markers(entry)));
    }
}

/// ` -- ⬅️🔚🔗` style marker tail, empty when the entry has no formatting.
fn markers(entry: &ExtractedString) -> String {
    let marks = format!(
        "{}{}{}",
        entry.spacing_marker(),
        entry.suffix_marker(),
        entry.concat_marker()
    );
    if marks.is_empty() {
        marks
    } else {
        format!(" -- {}", marks)
    }
}

/// Left-align `text` in a column of `width` display cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Cut `text` to at most `max` display cells.
fn truncate(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > max {
            return &text[..idx];
        }
    }
    text
}
