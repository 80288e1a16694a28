use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::candidate::{
    Candidate, CandidatePatch, CandidateStatus, NewCandidate, DEFAULT_JOB_TITLE,
};
use crate::store::CandidateStore;

/// Process-lifetime candidate store. Ids start at 1 and are never reused,
/// so iterating the `BTreeMap` yields insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    candidates: BTreeMap<u64, Candidate>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                candidates: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_candidates(seed: impl IntoIterator<Item = NewCandidate>) -> Self {
        let store = Self::new();
        for new in seed {
            store.create(new);
        }
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateStore for MemoryStore {
    fn create(&self, new: NewCandidate) -> Candidate {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let job_title = new
            .job_title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_JOB_TITLE.to_string());

        let candidate = Candidate {
            id,
            name: new.name,
            email: new.email,
            score: new.score,
            status: new.status,
            remark: new.remark,
            job_title,
            position: new.position,
            flags: new.flags.unwrap_or_default(),
            score_breakdown: new.score_breakdown,
            raw_text: new.raw_text,
        };
        inner.candidates.insert(id, candidate.clone());
        debug!(id, "candidate created");
        candidate
    }

    fn all(&self) -> Vec<Candidate> {
        self.inner.read().candidates.values().cloned().collect()
    }

    fn get(&self, id: u64) -> Option<Candidate> {
        self.inner.read().candidates.get(&id).cloned()
    }

    fn by_status(&self, status: CandidateStatus) -> Vec<Candidate> {
        self.inner
            .read()
            .candidates
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect()
    }

    fn update(&self, id: u64, patch: CandidatePatch) -> Option<Candidate> {
        let mut inner = self.inner.write();
        let candidate = inner.candidates.get_mut(&id)?;
        patch.apply_to(candidate);
        debug!(id, "candidate updated");
        Some(candidate.clone())
    }

    fn delete(&self, id: u64) -> bool {
        let removed = self.inner.write().candidates.remove(&id).is_some();
        if removed {
            debug!(id, "candidate deleted");
        }
        removed
    }

    fn len(&self) -> usize {
        self.inner.read().candidates.len()
    }
}
