//! Advisory rewrite expressions.
//!
//! A literal is rewritten as a `LOC` call carrying the base text as its
//! default value, with spaces and suffixes kept outside the call:
//!
//! | literal              | replacement                                    |
//! |----------------------|------------------------------------------------|
//! | `"My Text"`          | `LOC "$$$/K=My Text"`                          |
//! | `"My Text "`         | `LOC "$$$/K=My Text" .. " "`                   |
//! | `"My Text - "`       | `LOC "$$$/K=My Text" .. " - "`                 |
//! | `"  My Text - "`     | `"  " .. LOC "$$$/K=My Text" .. " - "`         |

use crate::core::data::ExtractedString;

/// Build the `LOC` expression for a literal.
pub fn loc_expression(
    key: &str,
    base_text: &str,
    leading_spaces: usize,
    trailing_spaces: usize,
    suffix: &str,
) -> String {
    let mut expr = String::new();
    if leading_spaces > 0 {
        expr.push_str(&format!("\"{}\" .. ", " ".repeat(leading_spaces)));
    }
    expr.push_str(&format!("LOC \"{}={}\"", key, base_text));
    if !suffix.is_empty() {
        expr.push_str(&format!(" .. \"{}\"", suffix));
    } else if trailing_spaces > 0 {
        expr.push_str(&format!(" .. \"{}\"", " ".repeat(trailing_spaces)));
    }
    expr
}

/// `LOC` expression for an extracted entry.
pub fn entry_expression(entry: &ExtractedString) -> String {
    loc_expression(
        &entry.suggested_key,
        &entry.base_text,
        entry.leading_spaces,
        entry.trailing_spaces,
        &entry.suffix,
    )
}

/// Apply every entry's replacement to `line`.
///
/// Entries are applied right to left (by the position of their quoted text)
/// and each one replaces the last remaining occurrence, so earlier offsets
/// stay valid.
pub fn replaced_line(line: &str, entries: &[&ExtractedString]) -> String {
    let mut ordered: Vec<&ExtractedString> = entries.to_vec();
    ordered.sort_by_key(|e| {
        std::cmp::Reverse(line.find(&format!("\"{}\"", e.original_text)).map_or(-1, |p| p as i64))
    });

    let mut result = line.to_string();
    for entry in ordered {
        let needle = format!("\"{}\"", entry.original_text);
        if let Some(pos) = result.rfind(&needle) {
            result.replace_range(pos..pos + needle.len(), &entry_expression(entry));
        }
    }
    result
}
