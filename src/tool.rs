//! Tool catalog and dispatch
//!
//! A [`Tool`] is one text-in, text-out operation from the catalog. Tools
//! that need more than a single text input (the regex tester, converters
//! and generators) are exposed as plain functions in [`crate::transformers`]
//! and fronted by their own CLI subcommands instead.

use tracing::debug;

use crate::error::{Result, ToolError};
use crate::transformers::{
    self, EntityKind, EntitySelection, JsonStyle, ReverseMode, ScrambleMode, SortOrder,
};

/// Options gathered from CLI flags before a tool is resolved
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// `None` keeps the tool's own default
    pub case_sensitive: Option<bool>,
    pub sort_order: SortOrder,
    pub reverse_mode: ReverseMode,
    pub scramble_mode: ScrambleMode,
    pub entities: EntitySelection,
}

/// Available text tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    // Case and characters
    Uppercase,
    Lowercase,
    SentenceCase,
    TitleCase,
    AlternatingCase,
    InverseCase,
    RemoveDiacritics,
    RemoveSymbols,
    CharCodes,
    Palindrome,

    // Lines and words
    RemoveDuplicateWords { case_sensitive: bool },
    RemoveDuplicateLines { case_sensitive: bool },
    RemoveBlankLines,
    SortLines { order: SortOrder },
    ReverseText { mode: ReverseMode },
    CleanWhitespace,
    Scramble { mode: ScrambleMode },

    // Analysis
    WordFrequency,
    CountSentences,
    CountUppercaseWords,
    Hashtags,
    Emojify,

    // Extraction
    Extract(EntityKind),
    ExtractEntities(EntitySelection),
    DetectInvisible,

    // Formats
    FormatJson(JsonStyle),
    JsonToCsv,
    MinifyCss,
    MinifyJs,
    CvvToJson,

    // Encoding
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,

    // Conversion
    Slugify,
    NumberToWords,
}

/// Canonical slugs in listing order
pub const SLUGS: &[&str] = &[
    "uppercase",
    "lowercase",
    "sentence-case",
    "title-case",
    "alternating-case",
    "inverse-case",
    "remove-diacritics",
    "remove-symbols",
    "text-to-ascii",
    "palindrome",
    "remove-duplicate-words",
    "remove-duplicate-lines",
    "remove-blank-lines",
    "sort-lines",
    "reverse-text",
    "whitespace-cleaner",
    "scramble",
    "word-frequency",
    "sentence-counter",
    "uppercase-counter",
    "hashtags",
    "emoji-replacer",
    "extract-emails",
    "extract-urls",
    "extract-phones",
    "extract-numbers",
    "entity-extractor",
    "invisible-characters",
    "json-prettify",
    "json-minify",
    "json-to-csv",
    "css-minifier",
    "javascript-minifier",
    "cvv-to-json",
    "base64-encode",
    "base64-decode",
    "url-encode",
    "url-decode",
    "text-to-slug",
    "number-to-words",
];

impl Tool {
    /// Resolve a CLI name (canonical slug or alias) to a tool
    pub fn from_slug(slug: &str, options: &ToolOptions) -> Option<Self> {
        let tool = match slug.trim().to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => Self::Uppercase,
            "lowercase" | "lower" => Self::Lowercase,
            "sentence-case" | "sentence" => Self::SentenceCase,
            "title-case" | "title" => Self::TitleCase,
            "alternating-case" | "alternating" => Self::AlternatingCase,
            "inverse-case" | "toggle-case" | "text-case-toggler" => Self::InverseCase,
            "remove-diacritics" | "diacritics" => Self::RemoveDiacritics,
            "remove-symbols" | "symbols" => Self::RemoveSymbols,
            "text-to-ascii" | "char-codes" | "ascii" => Self::CharCodes,
            "palindrome" | "palindrome-checker" => Self::Palindrome,
            "remove-duplicate-words" | "duplicate-word-remover" | "dedupe-words" => {
                Self::RemoveDuplicateWords { case_sensitive: options.case_sensitive.unwrap_or(false) }
            }
            "remove-duplicate-lines" | "dedupe-lines" => {
                Self::RemoveDuplicateLines { case_sensitive: options.case_sensitive.unwrap_or(true) }
            }
            "remove-blank-lines" | "blank-lines" => Self::RemoveBlankLines,
            "sort-lines" | "sort" => Self::SortLines { order: options.sort_order },
            "reverse-text" | "reverse" => Self::ReverseText { mode: options.reverse_mode },
            "whitespace-cleaner" | "clean-whitespace" => Self::CleanWhitespace,
            "scramble" | "text-scrambler" => Self::Scramble { mode: options.scramble_mode },
            "word-frequency" | "word-frequency-counter" => Self::WordFrequency,
            "sentence-counter" | "count-sentences" => Self::CountSentences,
            "uppercase-counter" | "count-uppercase" => Self::CountUppercaseWords,
            "hashtags" | "hashtag-generator" => Self::Hashtags,
            "emoji-replacer" | "emojify" => Self::Emojify,
            "extract-emails" | "email-extractor" | "emails" => Self::Extract(EntityKind::Email),
            "extract-urls" | "urls" => Self::Extract(EntityKind::Url),
            "extract-phones" | "phone-number-extractor" | "phones" => Self::Extract(EntityKind::Phone),
            "extract-numbers" | "numbers" => Self::Extract(EntityKind::Number),
            "entity-extractor" | "extract-entities" | "entities" => Self::ExtractEntities(options.entities),
            "invisible-characters" | "invisible-character-detector" | "invisible" => Self::DetectInvisible,
            "json-prettify" | "json-formatter" | "json" => Self::FormatJson(JsonStyle::Pretty),
            "json-minify" => Self::FormatJson(JsonStyle::Minified),
            "json-to-csv" | "csv" => Self::JsonToCsv,
            "css-minifier" | "minify-css" => Self::MinifyCss,
            "javascript-minifier" | "minify-js" => Self::MinifyJs,
            "cvv-to-json" | "cvv" => Self::CvvToJson,
            "base64-encode" | "base64" => Self::Base64Encode,
            "base64-decode" => Self::Base64Decode,
            "url-encode" => Self::UrlEncode,
            "url-decode" => Self::UrlDecode,
            "text-to-slug" | "slugify" | "slug" => Self::Slugify,
            "number-to-words" | "words" => Self::NumberToWords,
            _ => return None,
        };
        Some(tool)
    }

    /// Every tool, resolved with `options`
    pub fn all(options: &ToolOptions) -> Vec<Self> {
        SLUGS.iter().filter_map(|slug| Self::from_slug(slug, options)).collect()
    }

    /// Canonical CLI name
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::SentenceCase => "sentence-case",
            Self::TitleCase => "title-case",
            Self::AlternatingCase => "alternating-case",
            Self::InverseCase => "inverse-case",
            Self::RemoveDiacritics => "remove-diacritics",
            Self::RemoveSymbols => "remove-symbols",
            Self::CharCodes => "text-to-ascii",
            Self::Palindrome => "palindrome",
            Self::RemoveDuplicateWords { .. } => "remove-duplicate-words",
            Self::RemoveDuplicateLines { .. } => "remove-duplicate-lines",
            Self::RemoveBlankLines => "remove-blank-lines",
            Self::SortLines { .. } => "sort-lines",
            Self::ReverseText { .. } => "reverse-text",
            Self::CleanWhitespace => "whitespace-cleaner",
            Self::Scramble { .. } => "scramble",
            Self::WordFrequency => "word-frequency",
            Self::CountSentences => "sentence-counter",
            Self::CountUppercaseWords => "uppercase-counter",
            Self::Hashtags => "hashtags",
            Self::Emojify => "emoji-replacer",
            Self::Extract(EntityKind::Email) => "extract-emails",
            Self::Extract(EntityKind::Url) => "extract-urls",
            Self::Extract(EntityKind::Phone) => "extract-phones",
            Self::Extract(EntityKind::Number) => "extract-numbers",
            Self::ExtractEntities(_) => "entity-extractor",
            Self::DetectInvisible => "invisible-characters",
            Self::FormatJson(JsonStyle::Pretty) => "json-prettify",
            Self::FormatJson(JsonStyle::Minified) => "json-minify",
            Self::JsonToCsv => "json-to-csv",
            Self::MinifyCss => "css-minifier",
            Self::MinifyJs => "javascript-minifier",
            Self::CvvToJson => "cvv-to-json",
            Self::Base64Encode => "base64-encode",
            Self::Base64Decode => "base64-decode",
            Self::UrlEncode => "url-encode",
            Self::UrlDecode => "url-decode",
            Self::Slugify => "text-to-slug",
            Self::NumberToWords => "number-to-words",
        }
    }

    /// Get a human-readable name for the tool
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Uppercase => "UPPERCASE",
            Self::Lowercase => "lowercase",
            Self::SentenceCase => "Sentence case",
            Self::TitleCase => "Title Case",
            Self::AlternatingCase => "aLtErNaTiNg cAsE",
            Self::InverseCase => "iNVERSE cASE",
            Self::RemoveDiacritics => "Remove Diacritics",
            Self::RemoveSymbols => "Remove Symbols",
            Self::CharCodes => "Text to ASCII",
            Self::Palindrome => "Palindrome Checker",
            Self::RemoveDuplicateWords { .. } => "Remove Duplicate Words",
            Self::RemoveDuplicateLines { .. } => "Remove Duplicate Lines",
            Self::RemoveBlankLines => "Remove Blank Lines",
            Self::SortLines { order: SortOrder::Ascending } => "Sort Lines (A-Z)",
            Self::SortLines { order: SortOrder::Descending } => "Sort Lines (Z-A)",
            Self::SortLines { order: SortOrder::Random } => "Sort Lines (Random)",
            Self::ReverseText { .. } => "Reverse Text",
            Self::CleanWhitespace => "Whitespace Cleaner",
            Self::Scramble { .. } => "Text Scrambler",
            Self::WordFrequency => "Word Frequency",
            Self::CountSentences => "Sentence Counter",
            Self::CountUppercaseWords => "Uppercase Counter",
            Self::Hashtags => "Hashtag Generator",
            Self::Emojify => "Emoji Replacer",
            Self::Extract(EntityKind::Email) => "Email Extractor",
            Self::Extract(EntityKind::Url) => "URL Extractor",
            Self::Extract(EntityKind::Phone) => "Phone Number Extractor",
            Self::Extract(EntityKind::Number) => "Extract Numbers",
            Self::ExtractEntities(_) => "Entity Extractor",
            Self::DetectInvisible => "Invisible Character Detector",
            Self::FormatJson(JsonStyle::Pretty) => "JSON Prettify",
            Self::FormatJson(JsonStyle::Minified) => "JSON Minify",
            Self::JsonToCsv => "JSON to CSV",
            Self::MinifyCss => "CSS Minifier",
            Self::MinifyJs => "JavaScript Minifier",
            Self::CvvToJson => "CVV to JSON",
            Self::Base64Encode => "Base64 Encode",
            Self::Base64Decode => "Base64 Decode",
            Self::UrlEncode => "URL Encode",
            Self::UrlDecode => "URL Decode",
            Self::Slugify => "Text to Slug",
            Self::NumberToWords => "Number to Words",
        }
    }

    /// Get the category of this tool
    pub fn category(&self) -> &'static str {
        match self {
            Self::Uppercase | Self::Lowercase | Self::SentenceCase | Self::TitleCase |
            Self::AlternatingCase | Self::InverseCase => "Case Conversion",
            Self::RemoveDiacritics | Self::RemoveSymbols | Self::CharCodes |
            Self::Palindrome => "Characters",
            Self::RemoveDuplicateWords { .. } | Self::RemoveDuplicateLines { .. } |
            Self::RemoveBlankLines | Self::SortLines { .. } | Self::ReverseText { .. } |
            Self::CleanWhitespace | Self::Scramble { .. } => "Line Operations",
            Self::WordFrequency | Self::CountSentences | Self::CountUppercaseWords |
            Self::Hashtags | Self::Emojify => "Analysis",
            Self::Extract(_) | Self::ExtractEntities(_) | Self::DetectInvisible => "Extraction",
            Self::FormatJson(_) | Self::JsonToCsv | Self::MinifyCss | Self::MinifyJs |
            Self::CvvToJson => "Formatting",
            Self::Base64Encode | Self::Base64Decode | Self::UrlEncode | Self::UrlDecode => "Encoding",
            Self::Slugify | Self::NumberToWords => "Conversion",
        }
    }

    /// Tools that only refuse the empty string, not whitespace-only input
    fn accepts_blank_input(&self) -> bool {
        matches!(
            self,
            Self::RemoveBlankLines
                | Self::SortLines { .. }
                | Self::ReverseText { .. }
                | Self::Extract(EntityKind::Number)
                | Self::DetectInvisible
                | Self::Base64Encode
                | Self::Base64Decode
                | Self::UrlEncode
                | Self::UrlDecode
        )
    }

    /// Validate the input and apply this tool to it
    pub fn apply(&self, text: &str) -> Result<String> {
        let rejected = if self.accepts_blank_input() { text.is_empty() } else { text.trim().is_empty() };
        if rejected {
            return Err(ToolError::EmptyInput);
        }

        let output = self.run(text)?;
        debug!("{}: {} -> {} chars", self.slug(), text.len(), output.len());
        Ok(output)
    }

    fn run(&self, text: &str) -> Result<String> {
        let output = match self {
            Self::Uppercase => transformers::to_uppercase(text),
            Self::Lowercase => transformers::to_lowercase(text),
            Self::SentenceCase => transformers::to_sentence_case(text),
            Self::TitleCase => transformers::to_title_case(text),
            Self::AlternatingCase => transformers::to_alternating_case(text),
            Self::InverseCase => transformers::to_inverse_case(text),
            Self::RemoveDiacritics => transformers::remove_diacritics(text),
            Self::RemoveSymbols => transformers::remove_symbols(text),
            Self::CharCodes => transformers::to_char_codes(text),
            Self::Palindrome => {
                if transformers::is_palindrome(text) {
                    PALINDROME_YES.to_string()
                } else {
                    PALINDROME_NO.to_string()
                }
            }
            Self::RemoveDuplicateWords { case_sensitive } => {
                transformers::remove_duplicate_words(text, *case_sensitive)
            }
            Self::RemoveDuplicateLines { case_sensitive } => {
                transformers::remove_duplicate_lines(text, *case_sensitive)
            }
            Self::RemoveBlankLines => transformers::remove_blank_lines(text),
            Self::SortLines { order } => transformers::sort_lines(text, *order),
            Self::ReverseText { mode } => transformers::reverse_text(text, *mode),
            Self::CleanWhitespace => transformers::clean_whitespace(text),
            Self::Scramble { mode } => transformers::scramble(text, *mode),
            Self::WordFrequency => transformers::format_frequency(&transformers::word_frequency(text)),
            Self::CountSentences => transformers::count_sentences(text).to_string(),
            Self::CountUppercaseWords => transformers::count_uppercase_words(text).to_string(),
            Self::Hashtags => transformers::generate_hashtags(text),
            Self::Emojify => transformers::replace_with_emojis(text),
            Self::Extract(kind) => transformers::extract(*kind, text),
            Self::ExtractEntities(selection) => transformers::extract_entities(text, *selection),
            Self::DetectInvisible => transformers::detect_invisible(text).text,
            Self::FormatJson(style) => transformers::format_json(text, *style),
            Self::JsonToCsv => transformers::json_to_csv(text)?,
            Self::MinifyCss => transformers::minify_css(text),
            Self::MinifyJs => transformers::minify_js(text),
            Self::CvvToJson => transformers::cvv_to_json(text)?,
            Self::Base64Encode => transformers::base64_encode(text),
            Self::Base64Decode => transformers::base64_decode(text)?,
            Self::UrlEncode => transformers::url_encode(text),
            Self::UrlDecode => transformers::url_decode(text)?,
            Self::Slugify => transformers::slugify(text),
            Self::NumberToWords => transformers::number_to_words_str(text),
        };
        Ok(output)
    }
}

pub const PALINDROME_YES: &str = "Yes! It is a palindrome.";
pub const PALINDROME_NO: &str = "No, it is not a palindrome.";

/// Whether `output` is a placeholder message rather than a real result.
///
/// Sentinels are never copied to the clipboard.
pub fn is_sentinel(output: &str) -> bool {
    const FIXED: &[&str] = &[
        transformers::NO_ENTITIES,
        transformers::NUMBER_TOO_LARGE,
        transformers::INVALID_NUMBER,
    ];
    output.starts_with("Invalid JSON: ")
        || FIXED.contains(&output)
        || [EntityKind::Email, EntityKind::Url, EntityKind::Phone, EntityKind::Number]
            .iter()
            .any(|kind| output == kind.sentinel())
}

/// Search metadata for one tool page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

const fn info(title: &'static str, description: &'static str, href: &'static str) -> ToolInfo {
    ToolInfo { title, description, href }
}

/// Every tool in the collection, including the calculators and AI helpers
pub static CATALOG: &[ToolInfo] = &[
    info("Age Calculator", "Find out your exact age, down to the day.", "/age-calculator"),
    info("AI Summarizer", "Summarize PDF, or Text with AI.", "/ai-summarizer"),
    info("Base64 Encoder/Decoder", "Easily encode text to Base64 or decode it back to plain text.", "/base64-encoder-decoder"),
    info("Case Converter", "Convert text to Uppercase, Lowercase, Title Case, Sentence Case, and more.", "/case-converter"),
    info("ChatBot AI", "Smart Conversational Assistant powered by AI", "/chatbot-ai"),
    info("Color Converter", "Convert colors between HEX, RGB, and HSL formats instantly.", "/color-converter"),
    info("CSS Minifier", "Paste your CSS to remove spaces, line breaks, and comments.", "/css-minifier"),
    info("CVV to JSON", "Convert card data (Format: CC|MM|YY|CVV) into JSON structure format.", "/cvv-to-json"),
    info("Duplicate Word Remover", "Clean your text by removing repeated words automatically.", "/duplicate-word-remover"),
    info("Email Extractor", "Extract all email addresses from pasted text easily.", "/email-extractor"),
    info("Emoji Replacer", "Replace common words with emojis to make your text fun.", "/emoji-replacer"),
    info("Entity Extractor", "Automatically detect emails, phones, and URLs from your text.", "/entity-extractor"),
    info("Extract Numbers", "Extract only numbers from a block of text.", "/extract-numbers"),
    info("File Size Converter", "Convert between B, KB, MB, GB, TB, and PB using 1024 binary base units.", "/file-size-converter"),
    info("Foreign Word Detector", "Detect foreign or non-English words inside English paragraphs using AI.", "/foreign-word-detector"),
    info("Hashtag Generator", "Generate hashtags from your content to increase reach on social media.", "/hashtag-generator"),
    info("Invisible Character Detector", "Find hidden characters like zero-width space, ZWNJ, and others in your text.", "/invisible-character-detector"),
    info("JavaScript Minifier", "Minify and compress your JavaScript code for better performance.", "/javascript-minifier"),
    info("JSON Formatter", "Format, validate, and beautify your JSON data instantly.", "/json-formatter"),
    info("JSON to CSV Converter", "Convert JSON data to CSV format quickly and easily.", "/json-to-csv"),
    info("List Generator", "Create custom number lists by specifying start, end, and step.", "/list-generator"),
    info("Number to Words", "Convert numbers into written English words instantly.", "/number-to-words"),
    info("Palindrome Checker", "Test whether your sentence is a palindrome (ignores spaces & punctuation).", "/palindrome-checker"),
    info("Phone Number Extractor", "Extract phone numbers from any block of text quickly.", "/phone-number-extractor"),
    info("QR Generator", "Create custom QR codes in seconds.", "/qr-generator-scanner"),
    info("Random String Generator", "Generate secure random strings of customizable length.", "/random-string-generator"),
    info("Regex Tester", "Test and validate Regular Expressions online with real-time matching.", "/regex-tester"),
    info("Remove Blank Lines", "Remove all blank lines from your text.", "/remove-blank-lines"),
    info("Remove Diacritics", "Strip accents and special characters from your text easily (e.g., café -> cafe).", "/remove-diacritics"),
    info("Remove Duplicate Lines", "Eliminate duplicate lines from a text block instantly.", "/remove-duplicate-lines"),
    info("Remove Symbols", "Strip all symbols and special characters from your text, keeping only letters and numbers.", "/remove-symbols"),
    info("Reverse Text", "Reverse characters, words, or lines in your text.", "/reverse-text"),
    info("Sentence Counter", "Count how many sentences your content contains.", "/sentence-counter"),
    info("Sentence Rewriter", "Automatically rewrite text by replacing words with synonyms and improving structure.", "/sentence-rewriter"),
    info("Sort Lines Alphabetically", "Sort your text lines from A to Z, Z to A, or randomly.", "/sort-lines"),
    info("Synonym Enhancer", "Enhance your sentences by replacing words with better synonyms using AI.", "/synonym-enhancer"),
    info("Text Case Toggler", "Toggle uppercase and lowercase letters in your text easily (e.g. \"Hello\" -> \"hELLO\").", "/text-case-toggler"),
    info("Text Scrambler", "Randomly shuffle characters or words in your text.", "/text-scrambler"),
    info("AI Text Summarizer", "Paste any article or paragraph and let AI summarize it for you.", "/text-summarizer"),
    info("Text to ASCII Converter", "Convert regular text into ASCII character codes instantly.", "/text-to-ascii"),
    info("Text to Slug Converter", "Convert your titles or strings into SEO-friendly slugs.", "/text-to-slug"),
    info("Timestamp Converter", "Convert Unix timestamps to human-readable dates and vice versa.", "/timestamp-converter"),
    info("Ultra % Calculator", "Calculate percentages, increases, decreases, and more instantly.", "/ultra-percent-calculator"),
    info("Uppercase Counter", "Count how many words are written in ALL CAPS in your text.", "/uppercase-counter"),
    info("URL Encoder/Decoder", "Encode or decode URLs safely for web use.", "/url-encoder-decoder"),
    info("Whitespace Cleaner", "Clean up your text by removing extra spaces, tabs, and empty lines.", "/whitespace-cleaner"),
    info("Word Frequency Counter", "See which words are repeated the most in your text.", "/word-frequency-counter"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slug_round_trips() {
        let options = ToolOptions::default();
        for slug in SLUGS {
            let tool = Tool::from_slug(slug, &options).unwrap_or_else(|| panic!("unknown slug {}", slug));
            assert_eq!(tool.slug(), *slug);
        }
        assert_eq!(Tool::all(&options).len(), SLUGS.len());
    }

    #[test]
    fn test_aliases_and_defaults() {
        let options = ToolOptions::default();
        assert_eq!(Tool::from_slug("Toggle-Case", &options), Some(Tool::InverseCase));
        assert_eq!(
            Tool::from_slug("dedupe-lines", &options),
            Some(Tool::RemoveDuplicateLines { case_sensitive: true })
        );
        assert_eq!(
            Tool::from_slug("dedupe-words", &options),
            Some(Tool::RemoveDuplicateWords { case_sensitive: false })
        );
        assert_eq!(Tool::from_slug("no-such-tool", &options), None);
    }

    #[test]
    fn test_options_flow_into_tools() {
        let options = ToolOptions {
            case_sensitive: Some(false),
            sort_order: SortOrder::Descending,
            ..ToolOptions::default()
        };
        assert_eq!(
            Tool::from_slug("remove-duplicate-lines", &options),
            Some(Tool::RemoveDuplicateLines { case_sensitive: false })
        );
        assert_eq!(Tool::from_slug("sort", &options), Some(Tool::SortLines { order: SortOrder::Descending }));
    }

    #[test]
    fn test_blank_input_policy() {
        assert!(matches!(Tool::Uppercase.apply("   \n"), Err(ToolError::EmptyInput)));
        assert!(matches!(Tool::Extract(EntityKind::Email).apply("  "), Err(ToolError::EmptyInput)));
        // only the empty string is refused here
        assert_eq!(Tool::RemoveBlankLines.apply("  \n ").unwrap(), "");
        assert_eq!(Tool::Base64Encode.apply(" ").unwrap(), "IA==");
        assert!(matches!(Tool::Base64Encode.apply(""), Err(ToolError::EmptyInput)));
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Tool::Uppercase.apply("abc").unwrap(), "ABC");
        assert_eq!(
            Tool::RemoveDuplicateLines { case_sensitive: true }
                .apply("Apple\nBanana\nApple\nOrange")
                .unwrap(),
            "Apple\nBanana\nOrange"
        );
        assert_eq!(Tool::Palindrome.apply("Racecar").unwrap(), PALINDROME_YES);
        assert_eq!(Tool::Palindrome.apply("Rust").unwrap(), PALINDROME_NO);
        assert_eq!(Tool::CountSentences.apply("One. Two!").unwrap(), "2");
        assert_eq!(Tool::NumberToWords.apply("1234").unwrap(), "One Thousand Two Hundred and Thirty-Four");
    }

    #[test]
    fn test_json_errors_are_inline_sentinels() {
        let out = Tool::FormatJson(JsonStyle::Pretty).apply("{broken").unwrap();
        assert!(out.starts_with("Invalid JSON: "));
        assert!(is_sentinel(&out));
        // CSV conversion surfaces the error instead
        assert!(matches!(Tool::JsonToCsv.apply("{broken"), Err(ToolError::InvalidJson(_))));
    }

    #[test]
    fn test_decode_errors_surface() {
        assert!(matches!(Tool::Base64Decode.apply("***"), Err(ToolError::Decode(_))));
        assert!(matches!(Tool::UrlDecode.apply("%E0%A4%A"), Err(ToolError::Decode(_))));
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel("No emails found."));
        assert!(is_sentinel("No entities found."));
        assert!(is_sentinel("Number too large"));
        assert!(!is_sentinel("someone@example.com"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_catalog_hrefs_are_unique() {
        let mut hrefs: Vec<&str> = CATALOG.iter().map(|info| info.href).collect();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(hrefs.len(), CATALOG.len());
        assert!(CATALOG.iter().all(|info| info.href.starts_with('/')));
    }
}
