//! Random strings, numeric sequences and scrambling

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, ToolError};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Accepted lengths for [`random_string`]
pub const RANDOM_LENGTH: std::ops::RangeInclusive<usize> = 1..=128;

/// Most items [`generate_list`] will emit
pub const MAX_LIST_ITEMS: usize = 10_000;

/// Character classes drawn from by [`random_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self { uppercase: true, lowercase: true, digits: true, symbols: false }
    }
}

impl CharClasses {
    /// Enabled classes concatenated in a fixed order
    pub fn pool(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .collect()
    }
}

pub fn random_string(length: usize, classes: CharClasses) -> Result<String> {
    random_string_with(length, classes, &mut rand::thread_rng())
}

/// Sample `length` characters uniformly, with replacement, from the enabled pool
pub fn random_string_with<R: Rng + ?Sized>(length: usize, classes: CharClasses, rng: &mut R) -> Result<String> {
    if !RANDOM_LENGTH.contains(&length) {
        return Err(ToolError::InvalidOption(format!(
            "length must be between {} and {}",
            RANDOM_LENGTH.start(),
            RANDOM_LENGTH.end()
        )));
    }
    let pool = classes.pool();
    if pool.is_empty() {
        return Err(ToolError::EmptyCharacterPool);
    }
    Ok((0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect())
}

/// Arithmetic sequence from `start` to `end` inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct ListSpec {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub prefix: String,
    pub suffix: String,
}

impl Default for ListSpec {
    fn default() -> Self {
        Self { start: 1.0, end: 10.0, step: 1.0, prefix: String::new(), suffix: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedList {
    pub items: Vec<String>,
    /// More items were due than [`MAX_LIST_ITEMS`]
    pub truncated: bool,
}

impl GeneratedList {
    pub fn to_text(&self) -> String {
        self.items.join("\n")
    }
}

/// Generate the sequence described by `spec`.
///
/// A step whose sign points away from `end` is flipped. Output stops at
/// [`MAX_LIST_ITEMS`] and the list is marked truncated.
pub fn generate_list(spec: &ListSpec) -> Result<GeneratedList> {
    if spec.step == 0.0 {
        return Err(ToolError::InvalidOption("Step cannot be zero.".into()));
    }
    if !(spec.start.is_finite() && spec.end.is_finite() && spec.step.is_finite()) {
        return Err(ToolError::InvalidOption("start, end and step must be finite numbers".into()));
    }

    let step = if spec.start < spec.end {
        spec.step.abs()
    } else if spec.start > spec.end {
        -spec.step.abs()
    } else {
        spec.step
    };
    let in_range = |i: f64| if step > 0.0 { i <= spec.end } else { i >= spec.end };

    let mut items = Vec::new();
    let mut truncated = false;
    let mut i = spec.start;
    while in_range(i) {
        if items.len() == MAX_LIST_ITEMS {
            truncated = true;
            break;
        }
        items.push(format!("{}{}{}", spec.prefix, i, spec.suffix));
        i += step;
    }

    if truncated {
        warn!("List truncated to {} items", MAX_LIST_ITEMS);
    }
    Ok(GeneratedList { items, truncated })
}

/// Unit shuffled by [`scramble`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrambleMode {
    #[default]
    Words,
    Letters,
}

pub fn scramble(text: &str, mode: ScrambleMode) -> String {
    scramble_with(text, mode, &mut rand::thread_rng())
}

/// Shuffle whitespace-separated words (joined by single spaces) or every character
pub fn scramble_with<R: Rng + ?Sized>(text: &str, mode: ScrambleMode, rng: &mut R) -> String {
    match mode {
        ScrambleMode::Words => {
            let mut words: Vec<&str> = text.split_whitespace().collect();
            words.shuffle(rng);
            words.join(" ")
        }
        ScrambleMode::Letters => {
            let mut chars: Vec<char> = text.chars().collect();
            chars.shuffle(rng);
            chars.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pool_order() {
        let classes = CharClasses { uppercase: false, lowercase: false, digits: true, symbols: true };
        let pool: String = classes.pool().into_iter().collect();
        assert_eq!(pool, format!("{}{}", DIGITS, SYMBOLS));
    }

    #[test]
    fn test_random_string_uses_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let classes = CharClasses { uppercase: false, lowercase: false, digits: true, symbols: false };
        let out = random_string_with(64, classes, &mut rng).unwrap();
        assert_eq!(out.chars().count(), 64);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_string_errors() {
        let none = CharClasses { uppercase: false, lowercase: false, digits: false, symbols: false };
        assert!(matches!(random_string(8, none), Err(ToolError::EmptyCharacterPool)));
        assert!(matches!(random_string(0, CharClasses::default()), Err(ToolError::InvalidOption(_))));
        assert!(matches!(random_string(129, CharClasses::default()), Err(ToolError::InvalidOption(_))));
        assert_eq!(random_string(128, CharClasses::default()).unwrap().len(), 128);
    }

    #[test]
    fn test_generate_list_autocorrects_direction() {
        let spec = ListSpec { start: 5.0, end: 1.0, step: 1.0, ..ListSpec::default() };
        let list = generate_list(&spec).unwrap();
        assert_eq!(list.to_text(), "5\n4\n3\n2\n1");
        assert!(!list.truncated);

        let spec = ListSpec { start: 1.0, end: 3.0, step: -1.0, ..ListSpec::default() };
        assert_eq!(generate_list(&spec).unwrap().items, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_generate_list_prefix_suffix_and_fractions() {
        let spec = ListSpec {
            start: 0.0,
            end: 2.0,
            step: 0.5,
            prefix: "item-".into(),
            suffix: ";".into(),
        };
        assert_eq!(
            generate_list(&spec).unwrap().items,
            vec!["item-0;", "item-0.5;", "item-1;", "item-1.5;", "item-2;"]
        );
    }

    #[test]
    fn test_generate_list_single_item_and_zero_step() {
        let spec = ListSpec { start: 7.0, end: 7.0, step: 2.0, ..ListSpec::default() };
        assert_eq!(generate_list(&spec).unwrap().items, vec!["7"]);

        let spec = ListSpec { step: 0.0, ..ListSpec::default() };
        assert!(matches!(generate_list(&spec), Err(ToolError::InvalidOption(_))));
    }

    #[test]
    fn test_generate_list_caps_output() {
        let spec = ListSpec { start: 1.0, end: 1_000_000.0, step: 1.0, ..ListSpec::default() };
        let list = generate_list(&spec).unwrap();
        assert_eq!(list.items.len(), MAX_LIST_ITEMS);
        assert!(list.truncated);
        assert_eq!(list.items.last().map(String::as_str), Some("10000"));

        let exact = ListSpec { start: 1.0, end: 10_000.0, step: 1.0, ..ListSpec::default() };
        assert!(!generate_list(&exact).unwrap().truncated);
    }

    #[test]
    fn test_scramble_words_is_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = scramble_with("one  two\tthree four", ScrambleMode::Words, &mut rng);
        let mut words: Vec<&str> = out.split(' ').collect();
        words.sort();
        assert_eq!(words, vec!["four", "one", "three", "two"]);
    }

    #[test]
    fn test_scramble_letters_is_permutation() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = scramble_with("hello world", ScrambleMode::Letters, &mut rng);
        let mut got: Vec<char> = out.chars().collect();
        let mut want: Vec<char> = "hello world".chars().collect();
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }
}
