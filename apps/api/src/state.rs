use std::sync::Arc;

use crate::config::Config;
use crate::intake::extract::ResumeTextExtractor;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Candidate store owned by the process entry point.
    pub store: Arc<dyn CandidateStore>,
    /// Resume text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn ResumeTextExtractor>,
    pub config: Config,
}
