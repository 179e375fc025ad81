//! Base64 and URL component coding

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Result, ToolError};

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes
const URI_UNRESERVED_EXTRA: &[(&str, &str)] =
    &[("%21", "!"), ("%2A", "*"), ("%27", "'"), ("%28", "("), ("%29", ")")];

/// Base64-encode the UTF-8 bytes of `text`
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 into UTF-8 text
pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|e| ToolError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ToolError::Decode(e.to_string()))
}

/// Percent-encode with the `encodeURIComponent` character set
pub fn url_encode(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).into_owned();
    for (escaped, raw) in URI_UNRESERVED_EXTRA {
        encoded = encoded.replace(escaped, raw);
    }
    encoded
}

/// Reverse percent-encoding; a stray `%` or invalid UTF-8 is an error
pub fn url_decode(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(ToolError::Decode(format!("malformed escape at byte {}", i)));
        }
    }

    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ToolError::Decode(e.to_string()))
}
