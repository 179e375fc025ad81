//! QR code rendering

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::error::{Result, ToolError};

/// File name used when saving without an explicit path
pub const DEFAULT_FILE: &str = "qrcode.png";

/// A rendered QR code as PNG bytes
#[derive(Debug, Clone)]
pub struct QrImage {
    pub png: Vec<u8>,
}

impl QrImage {
    /// `data:` URL for embedding the image
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Encode `text` as a square PNG QR code of about `size` pixels
pub fn generate_qr(text: &str, size: u32) -> Result<QrImage> {
    if text.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }
    if size == 0 {
        return Err(ToolError::InvalidOption("QR size must be positive".into()));
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
        .map_err(|e| ToolError::Qr(e.to_string()))?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(size, size)
        .max_dimensions(size, size)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ToolError::Qr(e.to_string()))?;

    debug!("qr: {} chars -> {} byte png", text.len(), png.len());
    Ok(QrImage { png })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_generate_png() {
        let qr = generate_qr("https://example.com", 200).unwrap();
        assert!(qr.png.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&qr.png).unwrap();
        assert_eq!(decoded.width(), decoded.height());
        assert!(decoded.width() <= 200);
    }

    #[test]
    fn test_data_url() {
        let qr = generate_qr("hello", 100).unwrap();
        let url = qr.data_url();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), qr.png);
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(generate_qr("  ", 400), Err(ToolError::EmptyInput)));
    }

    #[test]
    fn test_payload_too_long() {
        let text = "x".repeat(5_000);
        assert!(matches!(generate_qr(&text, 400), Err(ToolError::Qr(_))));
    }
}
