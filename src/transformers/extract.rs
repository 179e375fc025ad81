//! Regex-backed extraction of emails, URLs, phone numbers and numbers
//!
//! Every extractor runs a global match over the input, drops repeated
//! matches while keeping first-seen order and joins the survivors with
//! newlines. An empty result is reported with a fixed sentinel string
//! instead of an empty string.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ToolError};

/// Sentinel for [`extract_entities`] when nothing matched
pub const NO_ENTITIES: &str = "No entities found.";

/// Phone candidates must carry this many digits once separators are removed
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// Invisible and formatting characters replaced by [`detect_invisible`]
pub const INVISIBLE_CHARS: &[(char, &str)] = &[
    ('\u{200B}', "[ZWSP]"),
    ('\u{200C}', "[ZWNJ]"),
    ('\u{200D}', "[ZWJ]"),
    ('\u{2060}', "[WJ]"),
    ('\u{FEFF}', "[BOM]"),
    ('\u{00A0}', "[NBSP]"),
    ('\t', "[TAB]"),
];

/// Kinds of entity the extractors know how to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Email,
    Url,
    Phone,
    Number,
}

impl EntityKind {
    fn regex(self) -> &'static Regex {
        static EMAIL: OnceLock<Regex> = OnceLock::new();
        static URL: OnceLock<Regex> = OnceLock::new();
        static PHONE: OnceLock<Regex> = OnceLock::new();
        static NUMBER: OnceLock<Regex> = OnceLock::new();
        match self {
            Self::Email => EMAIL.get_or_init(|| {
                Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex")
            }),
            Self::Url => URL.get_or_init(|| Regex::new(r"https?://\S+").expect("url regex")),
            Self::Phone => PHONE.get_or_init(|| Regex::new(r"\+?[0-9\s-]{7,}").expect("phone regex")),
            Self::Number => {
                NUMBER.get_or_init(|| Regex::new(r"-?[0-9]+(\.[0-9]+)?").expect("number regex"))
            }
        }
    }

    /// Result shown when nothing matched
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Email => "No emails found.",
            Self::Url => "No URLs found.",
            Self::Phone => "No phone numbers found.",
            Self::Number => "No numbers found.",
        }
    }

    /// Section title used by [`extract_entities`]
    pub fn header(self) -> &'static str {
        match self {
            Self::Email => "--- EMAILS ---",
            Self::Url => "--- URLs ---",
            Self::Phone => "--- PHONE NUMBERS ---",
            Self::Number => "--- NUMBERS ---",
        }
    }
}

/// All distinct matches of `kind` in first-seen order
pub fn find_entities(kind: EntityKind, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    kind.regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter_map(|found| match kind {
            // The phone pattern is deliberately broad; the digit count is
            // the real filter.
            EntityKind::Phone => {
                let trimmed = found.trim();
                let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
                PHONE_DIGITS.contains(&digits).then_some(trimmed)
            }
            _ => Some(found),
        })
        .filter(|found| seen.insert(found.to_string()))
        .map(str::to_string)
        .collect()
}

/// Newline-joined matches, or the kind's sentinel when there are none
pub fn extract(kind: EntityKind, text: &str) -> String {
    let found = find_entities(kind, text);
    if found.is_empty() {
        kind.sentinel().to_string()
    } else {
        found.join("\n")
    }
}

/// Which extractors [`extract_entities`] runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySelection {
    pub emails: bool,
    pub urls: bool,
    pub phones: bool,
}

impl Default for EntitySelection {
    fn default() -> Self {
        Self { emails: true, urls: true, phones: true }
    }
}

/// Run the selected extractors and group their results under headers.
///
/// Each section is followed by a blank line; sections without matches are
/// left out entirely.
pub fn extract_entities(text: &str, selection: EntitySelection) -> String {
    let kinds = [
        (selection.emails, EntityKind::Email),
        (selection.urls, EntityKind::Url),
        (selection.phones, EntityKind::Phone),
    ];

    let mut lines: Vec<String> = Vec::new();
    for (enabled, kind) in kinds {
        if !enabled {
            continue;
        }
        let found = find_entities(kind, text);
        if found.is_empty() {
            continue;
        }
        lines.push(kind.header().to_string());
        lines.extend(found);
        lines.push(String::new());
    }

    if lines.is_empty() {
        NO_ENTITIES.to_string()
    } else {
        lines.join("\n")
    }
}

/// Output of [`detect_invisible`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvisibleReport {
    /// Input with every invisible character replaced by its tag
    pub text: String,
    /// Number of replacements made
    pub count: usize,
}

impl InvisibleReport {
    pub fn summary(&self) -> String {
        format!("Found {} invisible character(s).", self.count)
    }
}

/// Tag zero-width, BOM, non-breaking space and tab characters
pub fn detect_invisible(text: &str) -> InvisibleReport {
    let mut result = String::with_capacity(text.len());
    let mut count = 0;
    for c in text.chars() {
        match INVISIBLE_CHARS.iter().find(|(ch, _)| *ch == c) {
            Some((_, tag)) => {
                result.push_str(tag);
                count += 1;
            }
            None => result.push(c),
        }
    }
    InvisibleReport { text: result, count }
}

/// Flags accepted by [`test_regex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self { global: true, ignore_case: false, multiline: false }
    }
}

/// Apply a user pattern to a test string.
///
/// Global mode returns every match. Otherwise the first match is returned
/// followed by its capture groups, with unmatched groups as empty strings.
/// A pattern that does not compile is reported as an error.
pub fn test_regex(pattern: &str, flags: RegexFlags, text: &str) -> Result<Vec<String>> {
    if pattern.is_empty() || text.is_empty() {
        return Ok(Vec::new());
    }

    let re = RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multiline)
        .build()
        .map_err(|e| ToolError::InvalidPattern(e.to_string()))?;

    if flags.global {
        return Ok(re.find_iter(text).map(|m| m.as_str().to_string()).collect());
    }

    Ok(re
        .captures(text)
        .map(|caps| {
            caps.iter()
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default())
}
