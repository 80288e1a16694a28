pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::candidates::handlers as candidates;
use crate::dashboard::handlers as dashboard;
use crate::errors::AppError;
use crate::intake::handlers as intake;
use crate::state::AppState;

/// Turns a handler panic into the generic 500 body.
fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal(anyhow::anyhow!("request handler panicked")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate CRUD
        .route(
            "/api/candidates",
            get(candidates::handle_list).post(candidates::handle_create),
        )
        .route(
            "/api/candidates/status/:status",
            get(candidates::handle_list_by_status),
        )
        .route(
            "/api/candidates/:id",
            get(candidates::handle_get)
                .patch(candidates::handle_update)
                .delete(candidates::handle_delete),
        )
        // Breakdown and compare views
        .route(
            "/api/candidates/:id/breakdown",
            get(dashboard::handle_breakdown),
        )
        .route("/api/candidates/:id/compare", get(dashboard::handle_compare))
        // Dashboard aggregates
        .route("/api/dashboard/stats", get(dashboard::handle_stats))
        .route("/api/dashboard/job-titles", get(dashboard::handle_job_titles))
        .route(
            "/api/dashboard/top-candidates",
            get(dashboard::handle_top_candidates),
        )
        // Resume intake
        .route(
            "/api/upload-resumes",
            post(intake::handle_upload_resumes).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/intake/preview", post(intake::handle_preview))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
