//! Translation key generation.
//!
//! Keys have the shape `{prefix}/{category}/{leaf}`:
//! - `category` comes from the source file name,
//! - `leaf` is up to four PascalCased significant words of the text, plus
//!   `Ellipsis` or `Question` when the text ends that way.
//!
//! The generator never mutates the used-key set; callers insert the key
//! once they accept it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::patterns::STOP_WORDS;

/// Category used when the file name leaves nothing after stripping.
pub const DEFAULT_CATEGORY: &str = "General";

/// Default substrings removed from file stems (`PWUploadTask.lua` -> `UploadTask`).
pub const DEFAULT_CATEGORY_STRIP: &[&str] = &["PW", "Piwigo"];

const MAX_KEY_WORDS: usize = 4;
const STOP_WORD_WINDOW: usize = 6;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+").unwrap());

#[derive(Debug, Clone)]
pub struct KeyGenerator {
    prefix: String,
    category_strip: Vec<String>,
}

impl KeyGenerator {
    pub fn new(prefix: impl Into<String>, category_strip: &[String]) -> Self {
        Self {
            prefix: prefix.into(),
            category_strip: category_strip.to_vec(),
        }
    }

    /// Derive a key for `base_text` that is absent from `used_keys`.
    ///
    /// Returns `None` when the text has no alphabetic word to build a key from.
    pub fn generate(
        &self,
        base_text: &str,
        file_name: &str,
        used_keys: &HashSet<String>,
    ) -> Option<String> {
        let leaf = key_leaf(base_text)?;
        let base_key = format!("{}/{}/{}", self.prefix, self.category(file_name), leaf);

        let mut key = base_key.clone();
        let mut counter = 2;
        while used_keys.contains(&key) {
            key = format!("{}{}", base_key, counter);
            counter += 1;
        }
        Some(key)
    }

    /// Category segment for a source file.
    pub fn category(&self, file_name: &str) -> String {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let category = self
            .category_strip
            .iter()
            .fold(stem, |acc, strip| acc.replace(strip.as_str(), ""));
        if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        }
    }
}

/// Build the leaf segment of a key from display text.
///
/// ```
/// use lrloc::core::key_gen::key_leaf;
///
/// assert_eq!(key_leaf("Cannot upload").as_deref(), Some("CannotUpload"));
/// assert_eq!(key_leaf("Delete this album?").as_deref(), Some("DeleteAlbumQuestion"));
/// assert_eq!(key_leaf("123 - 456"), None);
/// ```
pub fn key_leaf(text: &str) -> Option<String> {
    let clean = text.trim();
    let has_ellipsis = clean.ends_with("...");
    let has_question = clean.ends_with('?');

    let for_words = clean.trim_end_matches([':', '?', '.', '!', ' ']);
    let words: Vec<&str> = WORD_REGEX.find_iter(for_words).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return None;
    }

    let mut key_words: Vec<&str> = words
        .iter()
        .take(STOP_WORD_WINDOW)
        .filter(|w| is_emphasis(w) || !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .copied()
        .collect();
    if key_words.is_empty() {
        key_words = words.iter().take(MAX_KEY_WORDS).copied().collect();
    }

    let mut leaf: String = key_words
        .iter()
        .take(MAX_KEY_WORDS)
        .map(|w| pascal_case(w))
        .collect();

    if has_ellipsis {
        leaf.push_str("Ellipsis");
    } else if has_question {
        leaf.push_str("Question");
    }
    Some(leaf)
}

/// Fully uppercase words are intentional emphasis and survive stop-word filtering.
fn is_emphasis(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_uppercase())
}

/// Uppercase the first letter, keep the rest as written.
fn pascal_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
