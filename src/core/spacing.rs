//! Spacing and suffix analysis.
//!
//! Formatting spaces and the common suffixes (`" - "`, `" -"`, `"..."`) are
//! peeled off a literal so they do not multiply translation keys.

use crate::core::patterns::COMMON_SUFFIXES;

/// Split a literal into its trimmed text and the number of ASCII spaces at
/// each end. Other whitespace is not counted but is still trimmed.
///
/// ```
/// use lrloc::core::spacing::extract_spacing;
///
/// assert_eq!(extract_spacing("  Hello "), ("Hello".to_string(), 2, 1));
/// ```
pub fn extract_spacing(text: &str) -> (String, usize, usize) {
    let leading = text.len() - text.trim_start_matches(' ').len();
    let trailing = text.len() - text.trim_end_matches(' ').len();
    // An all-space literal must not count its spaces twice.
    let trailing = trailing.min(text.len() - leading);
    (text.trim().to_string(), leading, trailing)
}

/// Strip the first known suffix (longest first) whose removal leaves
/// non-blank text. Returns `(base, suffix)`; the suffix is empty when none
/// applies.
///
/// ```
/// use lrloc::core::spacing::extract_suffix;
///
/// assert_eq!(extract_suffix("Starting..."), ("Starting".to_string(), "...".to_string()));
/// assert_eq!(extract_suffix("..."), ("...".to_string(), String::new()));
/// ```
pub fn extract_suffix(text: &str) -> (String, String) {
    for suffix in COMMON_SUFFIXES {
        if let Some(base) = text.strip_suffix(suffix)
            && !base.trim().is_empty()
        {
            return (base.to_string(), suffix.to_string());
        }
    }
    (text.to_string(), String::new())
}

/// Full formatting breakdown of one literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatting {
    pub clean_text: String,
    pub base_text: String,
    pub leading_spaces: usize,
    pub trailing_spaces: usize,
    pub suffix: String,
}

impl Formatting {
    /// Reassemble the literal from its parts.
    pub fn reconstruct(&self) -> String {
        let trailing = if self.suffix.is_empty() {
            self.trailing_spaces
        } else {
            0
        };
        format!(
            "{}{}{}{}",
            " ".repeat(self.leading_spaces),
            self.base_text,
            self.suffix,
            " ".repeat(trailing)
        )
    }
}

/// Analyze a literal: spacing first, then the suffix.
///
/// The suffix is first looked for before the trailing spaces are dropped, so
/// `"Cannot upload - "` yields the suffix `" - "`. Otherwise the trimmed text
/// is tried, so `"Loading...  "` and `"Loading..."` share the base `"Loading"`.
/// A detected suffix always zeroes the trailing-space count.
pub fn analyze(original: &str) -> Formatting {
    let (clean_text, leading_spaces, trailing_spaces) = extract_spacing(original);
    let (base_text, suffix) = match extract_suffix(&original[leading_spaces..]) {
        (_, suffix) if suffix.is_empty() => extract_suffix(&clean_text),
        found => found,
    };
    let (base_text, trailing_spaces) = if suffix.is_empty() {
        (clean_text.clone(), trailing_spaces)
    } else {
        (base_text, 0)
    };
    Formatting {
        clean_text,
        base_text,
        leading_spaces,
        trailing_spaces,
        suffix,
    }
}
