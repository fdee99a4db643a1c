use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy the rendered translation for pasting elsewhere. Clipboard failure
/// is surfaced to the user, never to the resolver.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to copy text")?;
    Ok(())
}
