use bytes::Bytes;
use tracing::{error, info};

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF.
///
/// Parsing runs on the blocking pool; a parser panic on a hostile file surfaces
/// as an extraction error rather than taking down the worker.
pub async fn extract_text(document: Bytes) -> Result<String, AppError> {
    let size = document.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
        .await
        .map_err(|e| extraction_failed(e.to_string()))?
        .map_err(|e| extraction_failed(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(extraction_failed(
            "No text could be extracted from the PDF. The file might be scanned or secured."
                .to_string(),
        ));
    }

    info!(
        "Extracted {} chars of text from a {size} byte PDF",
        text.len()
    );
    Ok(text)
}

fn extraction_failed(detail: String) -> AppError {
    error!("PDF extraction error: {detail}");
    AppError::Validation(format!("PDF extraction error: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_bytes_are_rejected() {
        let err = extract_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("PDF extraction error")));
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        assert!(extract_text(Bytes::new()).await.is_err());
    }
}
