//! Line and word set operations

use std::collections::HashSet;
use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

/// Ordering applied by [`sort_lines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    /// Ascending sort, then reversed
    Descending,
    /// Uniform shuffle
    Random,
}

/// What [`reverse_text`] reverses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReverseMode {
    #[default]
    Characters,
    Words,
    Lines,
}

/// Remove repeated words, keeping the first occurrence.
///
/// Words are separated by runs of whitespace and re-joined with single
/// spaces.
pub fn remove_duplicate_words(text: &str, case_sensitive: bool) -> String {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| {
            let key = if case_sensitive { word.to_string() } else { word.to_lowercase() };
            seen.insert(key)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove repeated lines, keeping the first occurrence with its original casing
pub fn remove_duplicate_lines(text: &str, case_sensitive: bool) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| {
            let key = if case_sensitive { line.to_string() } else { line.to_lowercase() };
            seen.insert(key)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are empty after trimming
pub fn remove_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sort lines using the thread-local RNG for [`SortOrder::Random`]
pub fn sort_lines(text: &str, order: SortOrder) -> String {
    sort_lines_with(text, order, &mut rand::thread_rng())
}

/// Sort lines with a caller-supplied RNG
pub fn sort_lines_with<R: Rng + ?Sized>(text: &str, order: SortOrder, rng: &mut R) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    match order {
        SortOrder::Ascending => lines.sort(),
        SortOrder::Descending => {
            lines.sort();
            lines.reverse();
        }
        SortOrder::Random => lines.shuffle(rng),
    }
    lines.join("\n")
}

/// Reverse characters, whitespace-separated words, or lines
pub fn reverse_text(text: &str, mode: ReverseMode) -> String {
    match mode {
        ReverseMode::Characters => text.chars().rev().collect(),
        ReverseMode::Words => {
            let mut words: Vec<&str> = text.split_whitespace().collect();
            words.reverse();
            words.join(" ")
        }
        ReverseMode::Lines => {
            let mut lines: Vec<&str> = text.split('\n').collect();
            lines.reverse();
            lines.join("\n")
        }
    }
}

fn space_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("space run regex"))
}

/// Collapse space/tab runs, trim every line and drop empty lines
pub fn clean_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| space_run_regex().replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_remove_duplicate_lines() {
        assert_eq!(
            remove_duplicate_lines("Apple\nBanana\nApple\nOrange", true),
            "Apple\nBanana\nOrange"
        );
    }

    #[test]
    fn test_remove_duplicate_lines_case_insensitive_keeps_first_casing() {
        assert_eq!(remove_duplicate_lines("Apple\napple\nAPPLE\npear", false), "Apple\npear");
        assert_eq!(remove_duplicate_lines("Apple\napple", true), "Apple\napple");
    }

    #[test]
    fn test_remove_duplicate_lines_is_idempotent() {
        let once = remove_duplicate_lines("a\nb\n\na\nB\nb\n", false);
        assert_eq!(remove_duplicate_lines(&once, false), once);
    }

    #[test]
    fn test_remove_duplicate_words() {
        assert_eq!(remove_duplicate_words("the  cat The\tcat sat", false), "the cat sat");
        assert_eq!(remove_duplicate_words("the cat The", true), "the cat The");
    }

    #[test]
    fn test_remove_blank_lines() {
        assert_eq!(remove_blank_lines("one\n\n  \ntwo\n\t\nthree"), "one\ntwo\nthree");
    }

    #[test]
    fn test_sort_lines() {
        assert_eq!(sort_lines("pear\napple\nBanana", SortOrder::Ascending), "Banana\napple\npear");
        assert_eq!(sort_lines("pear\napple\nBanana", SortOrder::Descending), "pear\napple\nBanana");
    }

    #[test]
    fn test_sort_lines_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = "a\nb\nc\nd\ne";
        let shuffled = sort_lines_with(input, SortOrder::Random, &mut rng);
        let mut lines: Vec<&str> = shuffled.split('\n').collect();
        lines.sort();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_reverse_text() {
        assert_eq!(reverse_text("abc", ReverseMode::Characters), "cba");
        assert_eq!(reverse_text("Hello  big\nWorld", ReverseMode::Words), "World big Hello");
        assert_eq!(reverse_text("1\n2\n3", ReverseMode::Lines), "3\n2\n1");
    }

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(clean_whitespace("  hello   \t world  \n\n\n  next   line \n"), "hello world\nnext line");
    }
}
