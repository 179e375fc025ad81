//! Clipboard access for `--paste` input and `--copy` output

use anyhow::{Context, Result};
use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use tracing::debug;

/// Thin wrapper over the system clipboard
pub struct ClipboardManager;

impl ClipboardManager {
    /// Get the current clipboard text
    pub fn get_text() -> Result<String> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        let text = clipboard.get_text().context("Failed to get clipboard text")?;
        debug!("Read {} chars from clipboard", text.len());
        Ok(text)
    }

    /// Set the clipboard text.
    ///
    /// On Linux the process owns the selection, so this blocks until a
    /// clipboard manager has taken it over; otherwise the text would vanish
    /// when the CLI exits.
    #[cfg(target_os = "linux")]
    pub fn set_text(text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .context("Failed to set clipboard text")?;
        debug!("Copied {} chars to clipboard", text.len());
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    pub fn set_text(text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard.set_text(text).context("Failed to set clipboard text")?;
        debug!("Copied {} chars to clipboard", text.len());
        Ok(())
    }
}
