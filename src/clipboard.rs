//! System clipboard copy

use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// # Errors
/// Returns an error string if the clipboard is unavailable (e.g. headless
/// session) or the copy fails. Callers report this and carry on; a failed
/// copy never aborts the run.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy to clipboard: {e}"))
}
