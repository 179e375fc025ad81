//! Error types shared by every tool

use thiserror::Error;

use crate::ai::ServiceError;

/// Result alias for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Failure of a single tool invocation.
///
/// None of these are fatal: the caller reports the message and keeps
/// whatever output it had before.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Primary input was empty or whitespace only
    #[error("Please enter some text.")]
    EmptyInput,

    /// JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// User-supplied regular expression failed to compile
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(String),

    /// Base64 or percent-decoding failed
    #[error("Could not decode input: {0}")]
    Decode(String),

    /// Timestamp could not be parsed or is out of range
    #[error("Invalid Timestamp: {0}")]
    InvalidTimestamp(String),

    /// Date could not be parsed or is out of range
    #[error("Invalid Date: {0}")]
    InvalidDate(String),

    /// Colour was not a `#RRGGBB` hex string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An option was outside its accepted range
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Random string generator was asked to draw from no character classes
    #[error("Please select at least one character type.")]
    EmptyCharacterPool,

    /// Upload was not a PDF or text file
    #[error("Unsupported file type: {0} (expected a PDF or TXT file)")]
    UnsupportedFile(String),

    /// Document could not be read or contained no text
    #[error("Document error: {0}")]
    Document(String),

    /// QR encoder rejected the payload
    #[error("QR code error: {0}")]
    Qr(String),

    /// External AI service failed
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_message_is_sentinel_prefixed() {
        let err = ToolError::InvalidJson("expected value at line 1 column 1".into());
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_service_error_is_transparent() {
        let err: ToolError = ServiceError::Unavailable("no endpoint".into()).into();
        assert_eq!(err.to_string(), ServiceError::Unavailable("no endpoint".into()).to_string());
    }
}
