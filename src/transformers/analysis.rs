//! Counters and word-level rewrites

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("word regex"))
}

fn sentence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+(\s|$)|[^.!?]+$").expect("sentence regex"))
}

fn non_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("non-word regex"))
}

/// Word to emoji lookup used by [`replace_with_emojis`]
pub const EMOJI_TABLE: &[(&str, &str)] = &[
    ("happy", "😊"),
    ("sad", "😢"),
    ("love", "❤️"),
    ("like", "👍"),
    ("cool", "😎"),
    ("fire", "🔥"),
    ("star", "⭐"),
    ("heart", "💖"),
    ("sun", "☀️"),
    ("moon", "🌙"),
    ("dog", "🐶"),
    ("cat", "🐱"),
    ("pizza", "🍕"),
    ("coffee", "☕"),
    ("music", "🎵"),
    ("party", "🎉"),
    ("money", "💰"),
    ("time", "⏰"),
    ("world", "🌍"),
    ("hello", "👋"),
    ("bye", "👋"),
    ("yes", "✅"),
    ("no", "❌"),
    ("check", "✅"),
    ("wrong", "❌"),
    ("smile", "😄"),
    ("laugh", "😂"),
    ("cry", "😭"),
    ("angry", "😠"),
    ("rocket", "🚀"),
];

/// Count lower-cased words, most frequent first.
///
/// Ties keep the order in which the words first appeared.
pub fn word_frequency(text: &str) -> Vec<(String, usize)> {
    let lower = text.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for m in word_regex().find_iter(&lower) {
        let word = m.as_str();
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.to_string(), 1);
                order.push(word.to_string());
            }
        }
    }

    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or_default();
            (word, count)
        })
        .collect();
    // stable sort keeps first-seen order among equal counts
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Render a frequency table as `word: count` lines
pub fn format_frequency(frequency: &[(String, usize)]) -> String {
    frequency
        .iter()
        .map(|(word, count)| format!("{}: {}", word, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count sentences terminated by `.`, `!` or `?` plus a trailing fragment
pub fn count_sentences(text: &str) -> usize {
    sentence_regex()
        .find_iter(text)
        .filter(|m| !m.as_str().trim().is_empty())
        .count()
}

/// Count whitespace-separated words whose ASCII letters are all upper case
pub fn count_uppercase_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|word| {
            let letters: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            !letters.is_empty() && letters.chars().all(|c| c.is_ascii_uppercase())
        })
        .count()
}

/// Turn words longer than two characters into unique `#hashtags`
pub fn generate_hashtags(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned = non_word_regex().replace_all(&lower, "");
    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .filter(|word| seen.insert(*word))
        .map(|word| format!("#{}", word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_word(result: &mut String, word: &str) {
    match emoji_for(word) {
        Some(emoji) => result.push_str(emoji),
        None => result.push_str(word),
    }
}

fn emoji_for(word: &str) -> Option<&'static str> {
    let key: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    EMOJI_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, emoji)| *emoji)
}

/// Replace known words with emojis, keeping the original whitespace.
///
/// Punctuation attached to a replaced word is dropped with it.
pub fn replace_with_emojis(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&mut result, &text[start..i]);
            }
            result.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        push_word(&mut result, &text[start..]);
    }
    result
}
