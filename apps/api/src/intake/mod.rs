// Resume Intake
// PDF text extraction plus a fixed keyword heuristic that drafts placeholder
// candidates for manual review. Nothing here assigns a numeric score.

pub mod extract;
pub mod handlers;
pub mod heuristic;
