//! Unit, number and slug conversions

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, ToolError};

/// Binary unit ladder, each step a factor of 1024
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 6] = [Self::B, Self::KB, Self::MB, Self::GB, Self::TB, Self::PB];

    fn exponent(self) -> i32 {
        match self {
            Self::B => 0,
            Self::KB => 1,
            Self::MB => 2,
            Self::GB => 3,
            Self::TB => 4,
            Self::PB => 5,
        }
    }

    /// Bytes in one of this unit
    pub fn factor(self) -> f64 {
        1024f64.powi(self.exponent())
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
            Self::PB => "PB",
        };
        f.write_str(name)
    }
}

impl FromStr for SizeUnit {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolError::InvalidOption(format!("unknown size unit '{}'", s)))
    }
}

/// Express `value` of `unit` in every unit of the ladder
pub fn convert_file_size(value: f64, unit: SizeUnit) -> Vec<(SizeUnit, f64)> {
    let bytes = value * unit.factor();
    SizeUnit::ALL
        .into_iter()
        .map(|target| (target, bytes / target.factor()))
        .collect()
}

/// Display policy for converted values.
///
/// Exact zero prints `0`, tiny magnitudes use 4-digit scientific notation,
/// integers print without a decimal point and everything else gets at most
/// six decimals with trailing zeros removed.
pub fn format_unit_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < 1e-6 {
        return format!("{:.4e}", value);
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }
    let fixed = format!("{:.6}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `unit: value` lines for the whole ladder
pub fn format_file_sizes(sizes: &[(SizeUnit, f64)]) -> String {
    sizes
        .iter()
        .map(|(unit, value)| format!("{}: {}", unit, format_unit_value(*value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sentinel for numbers at or above one trillion
pub const NUMBER_TOO_LARGE: &str = "Number too large";

/// Sentinel for input that is not a non-negative integer
pub const INVALID_NUMBER: &str = "Invalid Number";

const WORDS_LIMIT: u64 = 1_000_000_000_000;

const ONES: [&str; 20] = [
    "", "One ", "Two ", "Three ", "Four ", "Five ", "Six ", "Seven ", "Eight ", "Nine ", "Ten ",
    "Eleven ", "Twelve ", "Thirteen ", "Fourteen ", "Fifteen ", "Sixteen ", "Seventeen ",
    "Eighteen ", "Nineteen ",
];

const TENS: [&str; 10] =
    ["", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety"];

const SCALES: [(u64, &str); 3] =
    [(1_000_000_000, "Billion"), (1_000_000, "Million"), (1_000, "Thousand")];

fn spell(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let ones = n % 10;
        let tail = if ones != 0 { format!("-{}", ONES[ones as usize]) } else { " ".to_string() };
        return format!("{}{}", TENS[(n / 10) as usize], tail);
    }
    if n < 1000 {
        let rest = n % 100;
        let tail = if rest != 0 { format!("and {}", spell(rest)) } else { String::new() };
        return format!("{}Hundred {}", ONES[(n / 100) as usize], tail);
    }
    for (scale, name) in SCALES {
        if n >= scale {
            let rest = n % scale;
            let tail = if rest != 0 { spell(rest) } else { String::new() };
            return format!("{}{} {}", spell(n / scale), name, tail);
        }
    }
    String::new()
}

/// English words for `n` (short scale), or the too-large sentinel
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    if n >= WORDS_LIMIT {
        return NUMBER_TOO_LARGE.to_string();
    }
    spell(n).trim().to_string()
}

/// Parse and spell out user text
pub fn number_to_words_str(text: &str) -> String {
    match text.trim().parse::<u64>() {
        Ok(n) => number_to_words(n),
        Err(_) => INVALID_NUMBER.to_string(),
    }
}

/// Calculations offered by [`percent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentMode {
    /// `x%` of `value`
    #[default]
    Of,
    /// `value` increased by `x%`
    Increase,
    /// `value` decreased by `x%`
    Decrease,
}

pub fn percent(mode: PercentMode, percent: f64, value: f64) -> f64 {
    let share = value * percent / 100.0;
    match mode {
        PercentMode::Of => share,
        PercentMode::Increase => value + share,
        PercentMode::Decrease => value - share,
    }
}

fn slug_strip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("slug strip regex"))
}

fn slug_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_-]+").expect("slug separator regex"))
}

/// URL slug: lower-case ASCII words joined by single hyphens
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = slug_strip_regex().replace_all(lower.trim(), "");
    let joined = slug_separator_regex().replace_all(&stripped, "-");
    joined.trim_matches('-').to_string()
}
