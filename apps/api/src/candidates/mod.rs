// Candidate CRUD: request validation and the /api/candidates handlers.

pub mod handlers;
pub mod validation;
