//! Résumé text extraction from uploaded PDF bytes.
//!
//! pdf-extract concatenates the extractable text of every page; a page
//! with no text layer contributes nothing. Only a structurally
//! unparseable document fails, and that is the caller's (client's) fault.

use anyhow::anyhow;
use tracing::warn;

use crate::errors::AppError;

/// Extracts the full text of an uploaded PDF. Parsing is CPU-bound, so
/// it runs on the blocking pool.
pub async fn extract_resume_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let parsed = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?;

    parsed.map_err(|e| {
        warn!("Rejected unparseable resume upload: {e}");
        AppError::UnprocessableEntity(format!("Failed to parse PDF: {e}"))
    })
}

/// First `max` characters of the text, with an ellipsis when truncated.
/// Used for the upload response preview.
pub fn preview_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview_text("short resume", 500), "short resume");
    }

    #[test]
    fn test_preview_long_text_truncated_with_ellipsis() {
        let text = "x".repeat(600);
        let preview = preview_text(&text, 500);
        assert_eq!(preview.len(), 503);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_exact_length_has_no_ellipsis() {
        let text = "y".repeat(500);
        assert_eq!(preview_text(&text, 500), text);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(600);
        let preview = preview_text(&text, 500);
        assert_eq!(preview.chars().count(), 503);
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_a_client_error() {
        let result = extract_resume_text(b"definitely not a pdf".to_vec()).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
