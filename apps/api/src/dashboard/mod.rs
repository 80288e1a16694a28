// Dashboard views: filtering, ranking, status counts and per-category insights.
// Pure functions live in `filter` and `insight`; `handlers` only reads the store.

pub mod filter;
pub mod handlers;
pub mod insight;
