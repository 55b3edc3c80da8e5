//! Technical-string classifier.
//!
//! Precedence is fixed: exact exclusion list, then regex families, then the
//! bare-identifier-in-technical-context rule. The last rule is a policy
//! table: which lines count as technical, and which UI-context triggers it
//! tightens, are both configurable.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::patterns::{
    BARE_IDENTIFIER_REGEX, DEFAULT_TECHNICAL_CONTEXT_PATTERNS, IGNORE_EXACT, TECHNICAL_PATTERNS,
};

/// Default triggers the technical-context rule applies to.
pub const DEFAULT_CONTEXT_TRIGGERS: &[&str] = &["value"];

#[derive(Debug, Clone)]
pub struct Classifier {
    extra_ignore_texts: HashSet<String>,
    context_patterns: Vec<Regex>,
    context_triggers: HashSet<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            extra_ignore_texts: HashSet::new(),
            context_patterns: DEFAULT_TECHNICAL_CONTEXT_PATTERNS
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            context_triggers: DEFAULT_CONTEXT_TRIGGERS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl Classifier {
    /// Build a classifier extending the built-in tables.
    ///
    /// `extra_context_patterns` are appended to the default technical-context
    /// family; `context_triggers` replaces the default trigger list.
    pub fn new(
        extra_ignore_texts: &[String],
        extra_context_patterns: &[String],
        context_triggers: &[String],
    ) -> Result<Self> {
        let mut classifier = Self::default();
        classifier
            .extra_ignore_texts
            .extend(extra_ignore_texts.iter().map(|t| t.trim().to_lowercase()));
        for pattern in extra_context_patterns {
            let regex = Regex::new(pattern)
                .with_context(|| format!("Invalid technical context pattern: \"{}\"", pattern))?;
            classifier.context_patterns.push(regex);
        }
        classifier.context_triggers = context_triggers.iter().cloned().collect();
        Ok(classifier)
    }

    /// Whether the technical-context rule is applied to literals attributed
    /// to the given UI-context trigger.
    pub fn applies_context(&self, pattern_name: &str) -> bool {
        self.context_triggers.contains(pattern_name)
    }

    /// True if the whole line is a header block, an HTTP call site or a
    /// multipart body.
    pub fn is_technical_context(&self, line: &str) -> bool {
        self.context_patterns.iter().any(|p| p.is_match(line))
    }

    /// Decide whether `text` is technical noise rather than UI text.
    pub fn is_technical(&self, text: &str, line_context: Option<&str>) -> bool {
        let trimmed = text.trim();
        let lowered = trimmed.to_lowercase();

        if IGNORE_EXACT.contains(trimmed)
            || IGNORE_EXACT.contains(lowered.as_str())
            || self.extra_ignore_texts.contains(lowered.as_str())
        {
            return true;
        }

        if TECHNICAL_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
            return true;
        }

        if let Some(line) = line_context
            && self.is_technical_context(line)
            && BARE_IDENTIFIER_REGEX.is_match(trimmed)
        {
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crate::core::classify::*;
    use crate::core::patterns::IGNORE_EXACT;

    #[test]
    fn test_exact_exclusions_are_always_technical() {
        let classifier = Classifier::default();
        for text in IGNORE_EXACT.iter() {
            assert!(classifier.is_technical(text, None), "{:?}", text);
            assert!(
                classifier.is_technical(text, Some(r#"title = "x""#)),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_exact_exclusions_ignore_case_and_padding() {
        let classifier = Classifier::default();
        assert!(classifier.is_technical("  Cancel ", None));
        assert!(classifier.is_technical("WARNING", None));
        assert!(classifier.is_technical("True", None));
    }

    #[test]
    fn test_technical_shapes() {
        let classifier = Classifier::default();
        for text in [
            "https://piwigo.org",
            "http://localhost",
            "1.2.3-beta",
            "application/octet-stream",
            "image/jpeg",
            "pwg.images.addSimple",
            "remote_id",
            "length",
            "Content-Disposition",
            "LrPathUtils",
            "DEBUG: response",
            "/tmp/export",
            "\\server\\share",
            "12345",
            "123e4567-e89b-12d3-a456-426614174000",
        ] {
            assert!(classifier.is_technical(text, None), "{:?}", text);
        }
    }

    #[test]
    fn test_ui_text_is_not_technical() {
        let classifier = Classifier::default();
        for text in [
            "Cannot upload",
            "Delete this album?",
            "Connection NOT successful",
            "Upload photos to Piwigo",
            "Album",
            "a very long lowercase sentence",
        ] {
            assert!(!classifier.is_technical(text, None), "{:?}", text);
        }
    }

    #[test]
    fn test_bare_identifier_rejected_in_technical_context() {
        let classifier = Classifier::default();
        let line = r#"{ field = "X-Requested-With", value = "XMLHttpRequest" }"#;
        assert!(classifier.is_technical("XMLHttpRequest", Some(line)));
        assert!(!classifier.is_technical("XMLHttpRequest", None));
        assert!(!classifier.is_technical("Upload failed", Some(line)));
    }

    #[test]
    fn test_context_requires_technical_line() {
        let classifier = Classifier::default();
        assert!(!classifier.is_technical("Landscape", Some(r#"value = "Landscape""#)));
        assert!(classifier.is_technical(
            "Landscape",
            Some(r#"LrHttp.post(url, body, { value = "Landscape" })"#)
        ));
    }

    #[test]
    fn test_configured_policy() {
        let classifier = Classifier::new(
            &["Piwigo".to_string()],
            &[r"\bapiParams\b".to_string()],
            &["value".to_string(), "label".to_string()],
        )
        .unwrap();
        assert!(classifier.is_technical("Piwigo", None));
        assert!(classifier.applies_context("label"));
        assert!(!classifier.applies_context("title"));
        assert!(classifier.is_technical("Sort", Some(r#"apiParams = { value = "Sort" }"#)));
    }

    #[test]
    fn test_configured_ignore_texts_ignore_case_and_padding() {
        let classifier = Classifier::new(&["  PIWIGO ".to_string()], &[], &[]).unwrap();
        assert!(classifier.is_technical("Piwigo", None));
        assert!(classifier.is_technical(" PiWiGo ", None));
        assert!(!classifier.is_technical("Piwigo album", None));
    }

    #[test]
    fn test_invalid_context_pattern_fails() {
        let result = Classifier::new(&[], &["(unclosed".to_string()], &[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("(unclosed"));
    }
}
