//! Static pattern tables driving the extractor.
//!
//! Order is significant in every ordered table: evaluation is first-match-wins
//! and the broad patterns sit at the end.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Namespace marker every LOC key starts with.
pub const KEY_NAMESPACE: &str = "$$$/";

/// File names never scanned.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["JSON.lua"];

/// Known formatting suffixes, longest first.
pub const COMMON_SUFFIXES: &[&str] = &[" - ", " -", "..."];

/// Diagnostic log calls: `log(`, `logWarn:`, `logger:info(`, `trace:debug (`...
pub static LOG_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(log|logInfo|logWarn|logError|logTrace|logDebug)\s*[:(]|\b(log|info|warn|error|trace|debug)\s*:\s*(log|info|warn|error|trace|debug)?\s*\(",
    )
    .unwrap()
});

/// Every double-quoted literal on a line.
pub static LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// An existing key binding: `LOC "$$$/Key=Default value"`.
pub static LOC_BINDING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"LOC\s*"(\$\$\$/[^="]+)=([^"]+)""#).unwrap());

/// UI-context triggers, specific call sites first and `value=` last.
pub static UI_CONTEXT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("LrDialogs.message", r"LrDialogs\.message\s*\("),
        ("LrDialogs.confirm", r"LrDialogs\.confirm\s*\("),
        ("LrDialogs.showError", r"LrDialogs\.showError\s*\("),
        ("LrDialogs.showBezel", r"LrDialogs\.showBezel\s*\("),
        ("LrDialogs.runOpenPanel", r"LrDialogs\.runOpenPanel\s*\("),
        ("LrDialogs.runSavePanel", r"LrDialogs\.runSavePanel\s*\("),
        ("LrDialogs.presentModalDialog", r"LrDialogs\.presentModalDialog\s*\("),
        ("LrErrors.throwUserError", r"LrErrors\.throwUserError\s*\("),
        ("LrErrors.throwCanceled", r"LrErrors\.throwCanceled\s*\("),
        ("title", r"\btitle\s*=\s*"),
        ("tooltip", r"\btooltip\s*=\s*"),
        ("label", r"\blabel\s*=\s*"),
        ("placeholder", r"\bplaceholder\s*=\s*"),
        ("actionVerb", r"\bactionVerb\s*=\s*"),
        ("cancelVerb", r"\bcancelVerb\s*=\s*"),
        ("otherVerb", r"\botherVerb\s*=\s*"),
        ("message", r"\bmessage\s*=\s*"),
        ("info", r"\binfo\s*=\s*"),
        ("caption", r"\bcaption\s*=\s*"),
        ("statusMsg", r"\bstatusMsg\s*=\s*"),
        ("LrPluginName", r"LrPluginName\s*=\s*"),
        ("popup_item", r#"\{\s*title\s*=\s*"[^"]*"\s*,\s*value\s*="#),
        ("value", r"\bvalue\s*=\s*"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

/// Returns the name of the first UI-context trigger matching `line`.
pub fn match_ui_context(line: &str) -> Option<&'static str> {
    UI_CONTEXT_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|(name, _)| *name)
}

/// Strings always treated as technical (compared as-is and lowercased).
pub static IGNORE_EXACT: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "", " ", "  ", "...", ".", ",", ":", ";", "-",
        "nil", "true", "false", "null",
        "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS",
        "UTF-8", "utf-8", "json", "xml", "html", "text",
        "Accept", "User-Agent", "Content-Type", "Authorization", "Cookie",
        "Cache-Control", "If-None-Match", "If-Modified-Since",
        "application/json", "application/xml", "application/x-www-form-urlencoded",
        "text/plain", "text/html", "text/xml",
        "application/vnd.github.v3+json",
        "multipart/form-data",
        "PiwigoPublish-Lightroom-Plugin",
        "Piwigo Publisher",
        "ok", "cancel", "other",
        "Ok", "Cancel", "Other",
        "OK", "CANCEL", "OTHER",
        "Reset", "Import", "Check", "Delete", "Remove", "Apply", "Save", "Load",
        "Yes", "No", "Abort", "Retry", "Ignore", "Continue", "Stop", "Close",
        "info", "warning", "critical", "error",
        "boundary",
    ]
    .into_iter()
    .collect()
});

/// Shapes of technical strings.
pub static TECHNICAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https?://",
        r"^\d+\.\d+\.\d+",
        r"^application/",
        r"^text/",
        r"^image/",
        r"^pwg\.",
        r"^[a-z_]+$",
        r"^[a-z]{3,15}$",
        r"^[A-Z][a-z]+(-[A-Z][a-z]+)+$",
        r"^Lr[A-Z]",
        r"^DEBUG",
        r"^[/\\]",
        r"^\d+$",
        r"(?i)^[a-f0-9-]{36}$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Lines in which bare identifiers are protocol data rather than UI text.
pub const DEFAULT_TECHNICAL_CONTEXT_PATTERNS: &[&str] = &[
    r#"\bfield\s*=\s*["']"#,
    r"headers?\s*=\s*\{",
    r"http\.request",
    r"LrHttp\.",
    r"multipart/form-data",
    r"\bboundary\b",
];

/// Bare identifier shape: a letter followed by letters, digits or hyphens.
pub static BARE_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][-A-Za-z0-9]*$").unwrap());

/// Existing keys that name protocol data (update checker headers).
pub static IGNORE_LOC_KEY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/UpdateChecker/Accept$",
        r"/UpdateChecker/UserAgent$",
        r"/UpdateChecker/PiwigopublishLightroomPlugin$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub const IGNORE_LOC_VALUES: &[&str] = &["Accept", "User-Agent", "PiwigoPublish-Lightroom-Plugin"];

/// True if an existing binding is protocol data and must not surface.
pub fn is_ignored_binding(key: &str, value: &str) -> bool {
    IGNORE_LOC_VALUES.contains(&value) || IGNORE_LOC_KEY_PATTERNS.iter().any(|p| p.is_match(key))
}

/// Function words dropped when building key leaves.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "if", "to", "for", "be", "will", "as", "on", "this", "in", "of",
    "and", "or", "not", "can", "has", "have", "been", "are", "was", "were", "being", "it",
];
