//! Candidate storage. Handlers only see `Arc<dyn CandidateStore>` from `AppState`,
//! so the in-memory backend can be replaced without touching them.

mod memory;

pub use memory::MemoryStore;

use crate::models::candidate::{Candidate, CandidatePatch, CandidateStatus, NewCandidate};

pub trait CandidateStore: Send + Sync {
    /// Assigns the next id and applies field defaults.
    fn create(&self, new: NewCandidate) -> Candidate;

    /// All candidates in insertion order.
    fn all(&self) -> Vec<Candidate>;

    fn get(&self, id: u64) -> Option<Candidate>;

    fn by_status(&self, status: CandidateStatus) -> Vec<Candidate>;

    /// Shallow merge of `patch` into the stored record. `None` if `id` is unknown.
    fn update(&self, id: u64, patch: CandidatePatch) -> Option<Candidate>;

    /// `true` if a record was removed.
    fn delete(&self, id: u64) -> bool;

    fn len(&self) -> usize;
}
