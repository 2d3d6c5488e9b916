//! Copying the display to the system clipboard.

use crate::error::{Result, ScicalError};
use arboard::Clipboard;
use tracing::debug;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ScicalError::clipboard(format!("failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ScicalError::clipboard(format!("failed to copy: {}", e)))?;

    debug!(text, "copied to clipboard");
    Ok(())
}
