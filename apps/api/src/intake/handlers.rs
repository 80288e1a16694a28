//! Axum route handlers for resume intake.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::intake::extract::is_pdf_mime;
use crate::intake::heuristic::extract_candidate_info;
use crate::models::candidate::NewCandidate;
use crate::state::AppState;

/// Multipart field carrying resume files. Repeated once per file.
const RESUMES_FIELD: &str = "resumes";

const UPLOAD_TOO_LARGE: &str = "Upload exceeds the size limit";

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub filename: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResult {
    fn created(filename: String, candidate_id: u64) -> Self {
        Self {
            filename,
            success: true,
            candidate_id: Some(candidate_id),
            error: None,
        }
    }

    fn failed(filename: String, error: impl Into<String>) -> Self {
        Self {
            filename,
            success: false,
            candidate_id: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub results: Vec<UploadResult>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filename: String,
}

/// POST /api/upload-resumes
///
/// Files are handled one at a time. A bad file is reported in its own result
/// entry and never aborts the rest of the batch. If the body stream breaks
/// after some files were stored (usually the upload size limit), the
/// results so far are returned with a failed entry for the broken part.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let mut results = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                stream_failed(&mut results, "unknown".to_string(), e)?;
                break;
            }
        };

        if field.name() != Some(RESUMES_FIELD) {
            let name = field.name().unwrap_or_default().to_string();
            // drain and ignore unrelated parts
            if let Err(e) = field.bytes().await {
                warn!(field = %name, "failed to drain multipart field: {}", e.body_text());
                stream_failed(&mut results, "unknown".to_string(), e)?;
                break;
            }
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let is_pdf = is_pdf_mime(field.content_type());
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                stream_failed(&mut results, filename, e)?;
                break;
            }
        };

        if !is_pdf {
            warn!(%filename, "rejected non-PDF upload");
            results.push(UploadResult::failed(filename, "Not a PDF file"));
            continue;
        }

        let text = match state.extractor.extract_text(data).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%filename, "resume extraction failed: {e}");
                results.push(UploadResult::failed(filename, e.to_string()));
                continue;
            }
        };

        let candidate = state.store.create(extract_candidate_info(&text, &filename));
        info!(%filename, candidate_id = candidate.id, "resume ingested");
        results.push(UploadResult::created(filename, candidate.id));
    }

    if results.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }

    Ok(Json(UploadResponse { results }))
}

/// Handles a broken multipart stream. Nothing processed yet means the whole
/// request failed; otherwise the broken part is recorded and the caller stops
/// reading, since the stream cannot be resumed.
fn stream_failed(
    results: &mut Vec<UploadResult>,
    filename: String,
    e: MultipartError,
) -> Result<(), AppError> {
    let too_large = e.status() == StatusCode::PAYLOAD_TOO_LARGE;
    warn!(%filename, too_large, "multipart stream failed: {}", e.body_text());

    let reason = if too_large {
        UPLOAD_TOO_LARGE.to_string()
    } else {
        format!("Multipart error: {}", e.body_text())
    };
    if results.is_empty() {
        return Err(if too_large {
            AppError::PayloadTooLarge(reason)
        } else {
            AppError::Validation(reason)
        });
    }

    results.push(UploadResult::failed(filename, reason));
    Ok(())
}

/// POST /api/intake/preview
///
/// Runs the intake heuristic over text extracted elsewhere (e.g. in the
/// browser) and returns the draft without storing it. The caller posts the
/// draft to `POST /api/candidates` when ready.
pub async fn handle_preview(
    request: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<NewCandidate>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;
    if request.text.trim().is_empty() && request.filename.trim().is_empty() {
        return Err(AppError::Validation(
            "text or filename is required".to_string(),
        ));
    }
    Ok(Json(extract_candidate_info(&request.text, &request.filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{CandidateStatus, Score};

    #[tokio::test]
    async fn test_preview_builds_draft() {
        let Json(draft) = handle_preview(Ok(Json(PreviewRequest {
            text: "Grace Hopper\ngrace@navy.example.mil\nCOBOL, SQL".to_string(),
            filename: "grace.pdf".to_string(),
        })))
        .await
        .unwrap();

        assert_eq!(draft.name, "Grace Hopper");
        assert_eq!(draft.email, "grace@navy.example.mil");
        assert_eq!(draft.score, Score::Unscored);
        assert_eq!(draft.status, CandidateStatus::Attention);
        assert!(draft.remark.contains("sql"));
    }

    #[tokio::test]
    async fn test_preview_rejects_empty_request() {
        let result = handle_preview(Ok(Json(PreviewRequest {
            text: "  ".to_string(),
            filename: String::new(),
        })))
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_failed_result_serialization() {
        let value =
            serde_json::to_value(UploadResult::failed("a.txt".to_string(), "Not a PDF file")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"filename": "a.txt", "success": false, "error": "Not a PDF file"})
        );
    }

    #[test]
    fn test_created_result_serialization() {
        let value = serde_json::to_value(UploadResult::created("a.pdf".to_string(), 7)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"filename": "a.pdf", "success": true, "candidateId": 7})
        );
    }
}
