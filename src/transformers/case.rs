//! Case and character transforms

use std::sync::OnceLock;

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

fn sentence_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[A-Za-z0-9_]|[.!?]\s*[A-Za-z0-9_]").expect("sentence start regex"))
}

fn symbol_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("symbol regex"))
}

/// Convert to UPPERCASE
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Convert to lowercase
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Convert to Sentence case.
///
/// The whole text is lower-cased, then the first word character of the text
/// and the first word character after every `.`, `!` or `?` is upper-cased.
/// Only ASCII word characters count as a sentence start.
pub fn to_sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    sentence_start_regex()
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Convert to Title Case.
///
/// Splits on literal spaces only, so runs of spaces and leading/trailing
/// spaces survive untouched.
pub fn to_title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// aLtErNaTiNg case by character index across the whole text
pub fn to_alternating_case(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(i, c)| -> Box<dyn Iterator<Item = char>> {
            if i % 2 == 0 {
                Box::new(c.to_lowercase())
            } else {
                Box::new(c.to_uppercase())
            }
        })
        .collect()
}

/// iNVERSE cASE: a character equal to its own upper-case form is lowered,
/// everything else is raised. Characters without case come out unchanged.
pub fn to_inverse_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        let mut upper = c.to_uppercase();
        let is_upper = upper.len() == 1 && upper.next() == Some(c);
        if is_upper {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
    }
    result
}

/// Strip combining diacritical marks (U+0300..=U+036F) after NFD decomposition
pub fn remove_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .collect()
}

/// Keep ASCII letters, digits and whitespace; drop everything else
pub fn remove_symbols(text: &str) -> String {
    symbol_regex().replace_all(text, "").into_owned()
}

/// UTF-16 code unit of every character, separated by spaces
pub fn to_char_codes(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| unit.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Palindrome check over lower-cased ASCII letters and digits
pub fn is_palindrome(text: &str) -> bool {
    let clean: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    clean.iter().eq(clean.iter().rev())
}
