//! Axum route handlers for the Candidate API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::candidates::validation::{validate_new_candidate, validate_patch};
use crate::dashboard::filter::CandidateFilter;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, CandidatePatch, CandidateStatus, NewCandidate};
use crate::state::AppState;

/// Creation failures never expose field-level detail to the caller.
const INVALID_CANDIDATE: &str = "Invalid candidate data";

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Candidate {id} not found"))
}

/// An id segment that is not a number can never name a stored candidate.
pub(crate) fn candidate_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    path.map(|Path(id)| id).map_err(|e| {
        debug!("unparseable candidate id: {}", e.body_text());
        AppError::NotFound("Candidate not found".to_string())
    })
}

/// GET /api/candidates
///
/// Without query parameters returns every candidate in insertion order.
/// Accepts `search`, `score`, `flag`, `jobTitle`, `status` dashboard filters.
pub async fn handle_list(
    State(state): State<AppState>,
    filter: Result<Query<CandidateFilter>, QueryRejection>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let Query(filter) = filter.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Json(filter.apply(&state.store.all())))
}

/// GET /api/candidates/status/:status
///
/// Unknown statuses match nothing and yield an empty array.
pub async fn handle_list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Json<Vec<Candidate>> {
    let candidates = status
        .parse::<CandidateStatus>()
        .map(|s| state.store.by_status(s))
        .unwrap_or_default();
    Json(candidates)
}

/// GET /api/candidates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Candidate>, AppError> {
    let id = candidate_id(id)?;
    state.store.get(id).map(Json).ok_or_else(|| not_found(id))
}

/// POST /api/candidates
pub async fn handle_create(
    State(state): State<AppState>,
    payload: Result<Json<NewCandidate>, JsonRejection>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    let Json(new) = payload.map_err(|e| {
        warn!("rejected candidate payload: {}", e.body_text());
        AppError::Validation(INVALID_CANDIDATE.to_string())
    })?;
    validate_new_candidate(&new).map_err(|e| {
        warn!("rejected candidate payload: {e}");
        AppError::Validation(INVALID_CANDIDATE.to_string())
    })?;

    let candidate = state.store.create(new);
    info!(id = candidate.id, "candidate created");
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// PATCH /api/candidates/:id
///
/// Partial update limited to the fields of `CandidatePatch`. Approve and
/// reject are `{"status": "qualified"}` and `{"status": "disqualified"}`.
pub async fn handle_update(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<CandidatePatch>, JsonRejection>,
) -> Result<Json<Candidate>, AppError> {
    let id = candidate_id(id)?;
    let Json(patch) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_patch(&patch)?;

    let candidate = state.store.update(id, patch).ok_or_else(|| not_found(id))?;
    info!(id, status = candidate.status.as_str(), "candidate updated");
    Ok(Json(candidate))
}

/// DELETE /api/candidates/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = candidate_id(id)?;
    if !state.store.delete(id) {
        return Err(not_found(id));
    }
    info!(id, "candidate deleted");
    Ok(StatusCode::NO_CONTENT)
}
