//! Axum route handlers for dashboard, chart and compare data.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::candidates::handlers::candidate_id;
use crate::dashboard::filter::{
    comparison_target, job_titles, status_counts, top_scored, CandidateFilter, StatusCounts,
    CHART_TOP_N,
};
use crate::dashboard::insight::CandidateInsight;
use crate::errors::AppError;
use crate::models::candidate::{Score, ScoreBreakdown};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub id: u64,
    pub name: String,
    pub job_title: String,
    pub score: Score,
    pub score_breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub with: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub candidate: CandidateInsight,
    pub opponent: Option<CandidateInsight>,
}

/// GET /api/dashboard/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<StatusCounts> {
    Json(status_counts(&state.store.all()))
}

/// GET /api/dashboard/job-titles
pub async fn handle_job_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(job_titles(&state.store.all()))
}

/// GET /api/dashboard/top-candidates
///
/// Stacked-bar series: dashboard filters first, then the ten best scores.
pub async fn handle_top_candidates(
    State(state): State<AppState>,
    filter: Result<Query<CandidateFilter>, QueryRejection>,
) -> Result<Json<Vec<ChartEntry>>, AppError> {
    let Query(filter) = filter.map_err(|e| AppError::Validation(e.body_text()))?;
    let filtered = filter.apply(&state.store.all());

    let entries = top_scored(&filtered, CHART_TOP_N)
        .into_iter()
        .map(|c| ChartEntry {
            id: c.id,
            job_title: c.effective_job_title().to_string(),
            name: c.name,
            score: c.score,
            score_breakdown: c.score_breakdown,
        })
        .collect();
    Ok(Json(entries))
}

/// GET /api/candidates/:id/breakdown
pub async fn handle_breakdown(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<CandidateInsight>, AppError> {
    let id = candidate_id(id)?;
    let candidate = state
        .store
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(CandidateInsight::for_candidate(candidate)))
}

/// GET /api/candidates/:id/compare?with=<id>
///
/// Without `with`, the opponent is the best scored other candidate.
pub async fn handle_compare(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<CompareResponse>, AppError> {
    let id = candidate_id(id)?;
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let all = state.store.all();
    let find = |wanted: u64| {
        all.iter()
            .find(|c| c.id == wanted)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Candidate {wanted} not found")))
    };

    let candidate = find(id)?;
    let opponent = match query.with {
        Some(other) => Some(find(other)?),
        None => comparison_target(&all, id),
    };

    Ok(Json(CompareResponse {
        candidate: CandidateInsight::for_candidate(candidate),
        opponent: opponent.map(CandidateInsight::for_candidate),
    }))
}
