//! Resume text extraction. `AppState` holds an `Arc<dyn ResumeTextExtractor>`;
//! production wires in `PdfTextExtractor`, tests swap in a stub.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Failed to parse PDF: {0}")]
    Extraction(String),
}

#[async_trait]
pub trait ResumeTextExtractor: Send + Sync {
    async fn extract_text(&self, data: Bytes) -> Result<String, IntakeError>;
}

/// Extracts text with `pdf-extract` on the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl ResumeTextExtractor for PdfTextExtractor {
    async fn extract_text(&self, data: Bytes) -> Result<String, IntakeError> {
        let joined = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
        })
        .await;

        match joined {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(reason)) => Err(IntakeError::Extraction(reason)),
            // pdf-extract panics on some malformed documents
            Err(e) => {
                warn!("PDF extraction task failed: {e}");
                Err(IntakeError::Extraction(
                    "document could not be read".to_string(),
                ))
            }
        }
    }
}

/// Multipart parts sometimes carry parameters (`application/pdf; name=x`).
pub fn is_pdf_mime(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|ct| ct.trim().eq_ignore_ascii_case(PDF_MIME))
}
