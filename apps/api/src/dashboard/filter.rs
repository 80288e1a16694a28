//! Filter/Sort Engine — pure functions over candidate lists.
//!
//! Shared by the candidate list endpoint, the chart endpoint and the compare view.
//! No store access here: callers pass in whatever slice they already hold.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::candidate::{Candidate, CandidateStatus};

/// Query value meaning "do not filter on this dimension".
const ALL: &str = "all";

/// Number of bars in the stacked score chart.
pub const CHART_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    High,
    Medium,
    Low,
}

impl ScoreBucket {
    /// High is 80 and up, medium 50 to 79, low below 50.
    pub fn of(points: u32) -> Self {
        match points {
            p if p >= 80 => ScoreBucket::High,
            p if p >= 50 => ScoreBucket::Medium,
            _ => ScoreBucket::Low,
        }
    }

    /// Unscored candidates belong to no bucket.
    pub fn contains(&self, candidate: &Candidate) -> bool {
        candidate
            .score
            .points()
            .is_some_and(|p| ScoreBucket::of(p) == *self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreFilter {
    #[default]
    All,
    Bucket(ScoreBucket),
}

impl FromStr for ScoreFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | ALL => Ok(ScoreFilter::All),
            "high" => Ok(ScoreFilter::Bucket(ScoreBucket::High)),
            "medium" => Ok(ScoreFilter::Bucket(ScoreBucket::Medium)),
            "low" => Ok(ScoreFilter::Bucket(ScoreBucket::Low)),
            other => Err(format!("unknown score filter '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for ScoreFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Dashboard filter set. Every dimension defaults to "all"; dimensions are ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilter {
    pub search: Option<String>,
    pub score: ScoreFilter,
    pub flag: Option<String>,
    pub job_title: Option<String>,
    pub status: Option<String>,
}

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        matches_search(candidate, self.search.as_deref().unwrap_or(""))
            && matches_score(candidate, self.score)
            && matches_flag(candidate, self.flag.as_deref().unwrap_or(ALL))
            && matches_job_title(candidate, self.job_title.as_deref().unwrap_or(ALL))
            && matches_status(candidate, self.status.as_deref().unwrap_or(ALL))
    }

    pub fn apply(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match on name, email, remark and job title.
pub fn matches_search(candidate: &Candidate, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        Some(candidate.name.as_str()),
        Some(candidate.email.as_str()),
        Some(candidate.remark.as_str()),
        Some(candidate.job_title.as_str()),
        candidate.position.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn matches_score(candidate: &Candidate, filter: ScoreFilter) -> bool {
    match filter {
        ScoreFilter::All => true,
        ScoreFilter::Bucket(bucket) => bucket.contains(candidate),
    }
}

pub fn matches_flag(candidate: &Candidate, flag: &str) -> bool {
    flag == ALL || candidate.flags.iter().any(|f| f == flag)
}

pub fn matches_job_title(candidate: &Candidate, job_title: &str) -> bool {
    job_title == ALL || candidate.effective_job_title() == job_title
}

/// Unknown status strings match nothing.
pub fn matches_status(candidate: &Candidate, status: &str) -> bool {
    status == ALL || candidate.status.as_str() == status
}

/// Highest scores first, unscored dropped. Equal scores keep ascending id order.
pub fn top_scored(candidates: &[Candidate], limit: usize) -> Vec<Candidate> {
    let mut scored: Vec<_> = candidates
        .iter()
        .filter(|c| c.score.is_scored())
        .cloned()
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .points()
            .cmp(&a.score.points())
            .then_with(|| a.id.cmp(&b.id))
    });
    scored.truncate(limit);
    scored
}

/// Default opponent for the compare view: best scored candidate other than `id`.
pub fn comparison_target(candidates: &[Candidate], id: u64) -> Option<Candidate> {
    let others: Vec<_> = candidates.iter().filter(|c| c.id != id).cloned().collect();
    top_scored(&others, 1).into_iter().next()
}

/// Distinct effective job titles, sorted.
pub fn job_titles(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| c.effective_job_title().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub qualified: usize,
    pub attention: usize,
    pub disqualified: usize,
    pub processing: usize,
    pub total: usize,
}

pub fn status_counts(candidates: &[Candidate]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: candidates.len(),
        ..Default::default()
    };
    for candidate in candidates {
        match candidate.status {
            CandidateStatus::Qualified => counts.qualified += 1,
            CandidateStatus::Attention => counts.attention += 1,
            CandidateStatus::Disqualified => counts.disqualified += 1,
            CandidateStatus::Processing => counts.processing += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Score, ScoreBreakdown, DEFAULT_JOB_TITLE};

    fn make_candidate(id: u64, score: &str) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {id}"),
            email: format!("c{id}@example.com"),
            score: score.parse().unwrap(),
            status: CandidateStatus::Attention,
            remark: String::new(),
            job_title: DEFAULT_JOB_TITLE.to_string(),
            position: None,
            flags: vec![],
            score_breakdown: ScoreBreakdown::default(),
            raw_text: None,
        }
    }

    fn bucket_filter(bucket: ScoreBucket) -> CandidateFilter {
        CandidateFilter {
            score: ScoreFilter::Bucket(bucket),
            ..Default::default()
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ScoreBucket::of(80), ScoreBucket::High);
        assert_eq!(ScoreBucket::of(79), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::of(50), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::of(49), ScoreBucket::Low);
        assert_eq!(ScoreBucket::of(0), ScoreBucket::Low);
    }

    #[test]
    fn test_buckets_partition_scored_candidates() {
        let candidates: Vec<_> = ["0", "23", "49", "50", "75", "79", "80", "92", "100", "?"]
            .iter()
            .enumerate()
            .map(|(i, s)| make_candidate(i as u64 + 1, s))
            .collect();

        for c in &candidates {
            let hits = [ScoreBucket::High, ScoreBucket::Medium, ScoreBucket::Low]
                .iter()
                .filter(|b| b.contains(c))
                .count();
            let expected = if c.score.is_scored() { 1 } else { 0 };
            assert_eq!(hits, expected, "candidate with score {} in {hits} buckets", c.score);
        }
    }

    #[test]
    fn test_score_85_is_high_not_low() {
        let c = make_candidate(1, "85");
        assert!(bucket_filter(ScoreBucket::High).matches(&c));
        assert!(!bucket_filter(ScoreBucket::Low).matches(&c));
    }

    #[test]
    fn test_score_75_with_breakdown_is_medium() {
        let mut c = make_candidate(1, "75");
        c.score_breakdown = ScoreBreakdown {
            skills: 50,
            collaboration: 10,
            problem_solving: 10,
            cultural_fit: 5,
        };
        assert!(bucket_filter(ScoreBucket::Medium).matches(&c));
    }

    #[test]
    fn test_score_filter_parse() {
        assert_eq!("all".parse::<ScoreFilter>().unwrap(), ScoreFilter::All);
        assert_eq!(
            "HIGH".parse::<ScoreFilter>().unwrap(),
            ScoreFilter::Bucket(ScoreBucket::High)
        );
        assert!("excellent".parse::<ScoreFilter>().is_err());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut c = make_candidate(1, "60");
        c.name = "Lee Chong Wai".to_string();
        c.remark = "Strong match: React, Node.js".to_string();
        c.job_title = "Senior Software Engineer".to_string();

        assert!(matches_search(&c, "chong"));
        assert!(matches_search(&c, "REACT"));
        assert!(matches_search(&c, "senior"));
        assert!(matches_search(&c, "c1@EXAMPLE"));
        assert!(matches_search(&c, ""));
        assert!(!matches_search(&c, "kotlin"));
    }

    #[test]
    fn test_search_covers_legacy_position() {
        let mut c = make_candidate(1, "60");
        c.position = Some("Data Analyst".to_string());
        assert!(matches_search(&c, "analyst"));
    }

    #[test]
    fn test_flag_filter() {
        let mut c = make_candidate(1, "100");
        c.flags = vec!["AI Generated".to_string()];
        assert!(matches_flag(&c, "all"));
        assert!(matches_flag(&c, "AI Generated"));
        assert!(!matches_flag(&c, "Spam"));
        assert!(!matches_flag(&make_candidate(2, "10"), "Spam"));
    }

    #[test]
    fn test_job_title_filter_uses_fallbacks() {
        let mut c = make_candidate(1, "70");
        c.job_title = String::new();
        assert!(matches_job_title(&c, "Other"));
        c.position = Some("UX Designer".to_string());
        assert!(matches_job_title(&c, "UX Designer"));
        assert!(!matches_job_title(&c, "Other"));
        assert!(matches_job_title(&c, "all"));
    }

    #[test]
    fn test_combined_filters_are_anded() {
        let mut spam = make_candidate(1, "23");
        spam.flags = vec!["Spam".to_string()];
        let mut strong = make_candidate(2, "92");
        strong.flags = vec!["Spam".to_string()];
        let plain = make_candidate(3, "30");

        let filter = CandidateFilter {
            score: ScoreFilter::Bucket(ScoreBucket::Low),
            flag: Some("Spam".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = filter
            .apply(&[spam, strong, plain])
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_status_filter() {
        let mut c = make_candidate(1, "90");
        c.status = CandidateStatus::Qualified;
        assert!(matches_status(&c, "qualified"));
        assert!(!matches_status(&c, "attention"));
        assert!(!matches_status(&c, "archived"));
    }

    #[test]
    fn test_top_scored_caps_and_skips_unscored() {
        let mut candidates: Vec<_> = (1..=14)
            .map(|i| make_candidate(i, &(i * 5).to_string()))
            .collect();
        candidates.push(make_candidate(15, "?"));
        candidates.push(make_candidate(16, "?"));

        let top = top_scored(&candidates, CHART_TOP_N);
        assert_eq!(top.len(), 10);
        assert!(top.iter().all(|c| c.score.is_scored()));
        assert_eq!(top[0].id, 14);
        let points: Vec<_> = top.iter().filter_map(|c| c.score.points()).collect();
        assert!(points.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_top_scored_ties_break_by_id() {
        let candidates = vec![
            make_candidate(7, "80"),
            make_candidate(3, "80"),
            make_candidate(5, "90"),
        ];
        let ids: Vec<_> = top_scored(&candidates, 10).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 3, 7]);
    }

    #[test]
    fn test_top_scored_all_unscored() {
        let candidates = vec![make_candidate(1, "?"), make_candidate(2, "?")];
        assert!(top_scored(&candidates, 10).is_empty());
    }

    #[test]
    fn test_comparison_target_excludes_self() {
        let candidates = vec![
            make_candidate(1, "100"),
            make_candidate(2, "92"),
            make_candidate(3, "?"),
        ];
        assert_eq!(comparison_target(&candidates, 1).unwrap().id, 2);
        assert_eq!(comparison_target(&candidates, 3).unwrap().id, 1);
        assert!(comparison_target(&candidates[..1], 1).is_none());
    }

    #[test]
    fn test_job_titles_distinct_sorted() {
        let mut a = make_candidate(1, "10");
        a.job_title = "UX Designer".to_string();
        let mut b = make_candidate(2, "20");
        b.job_title = "Frontend Developer".to_string();
        let mut c = make_candidate(3, "30");
        c.job_title = "UX Designer".to_string();
        let mut d = make_candidate(4, "40");
        d.job_title = String::new();

        assert_eq!(
            job_titles(&[a, b, c, d]),
            vec!["Frontend Developer", "Other", "UX Designer"]
        );
    }

    #[test]
    fn test_status_counts() {
        let mut q = make_candidate(1, "90");
        q.status = CandidateStatus::Qualified;
        let a = make_candidate(2, "60");
        let mut d = make_candidate(3, "10");
        d.status = CandidateStatus::Disqualified;

        let counts = status_counts(&[q, a, d]);
        assert_eq!(
            counts,
            StatusCounts {
                qualified: 1,
                attention: 1,
                disqualified: 1,
                processing: 0,
                total: 3,
            }
        );
    }

    #[test]
    fn test_unscored_fails_every_bucket() {
        let c = make_candidate(1, "?");
        for bucket in [ScoreBucket::High, ScoreBucket::Medium, ScoreBucket::Low] {
            assert!(!bucket_filter(bucket).matches(&c));
        }
        assert!(CandidateFilter::default().matches(&c));
        assert_eq!(c.score, Score::Unscored);
    }
}
