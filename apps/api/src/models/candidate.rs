use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Job title applied when a new candidate arrives without one.
pub const DEFAULT_JOB_TITLE: &str = "Software Developer";

/// Sentinel stored in `score` until a reviewer assigns a number.
pub const UNSCORED_MARKER: &str = "?";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Qualified,
    Attention,
    Disqualified,
    Processing,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Qualified,
        CandidateStatus::Attention,
        CandidateStatus::Disqualified,
        CandidateStatus::Processing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Qualified => "qualified",
            CandidateStatus::Attention => "attention",
            CandidateStatus::Disqualified => "disqualified",
            CandidateStatus::Processing => "processing",
        }
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandidateStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown candidate status '{s}'"))
    }
}

/// Overall candidate score. Travels over the wire as text so the unscored
/// marker `"?"` can share the field with numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    Unscored,
    Points(u32),
}

impl Score {
    pub fn points(&self) -> Option<u32> {
        match self {
            Score::Unscored => None,
            Score::Points(p) => Some(*p),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, Score::Points(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Unscored => f.write_str(UNSCORED_MARKER),
            Score::Points(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for Score {
    type Err = String;

    /// Only canonical text is accepted, so a stored score serializes back
    /// exactly as it was sent: no padding, no sign, no leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNSCORED_MARKER {
            return Ok(Score::Unscored);
        }
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("score must be '{UNSCORED_MARKER}' or a whole number, got '{s}'"));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(format!("score '{s}' has leading zeros"));
        }
        s.parse::<u32>()
            .map(Score::Points)
            .map_err(|e| format!("score '{s}' is out of range: {e}"))
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Weighted sub-scores. Maxima are 60 / 15 / 15 / 10 (total 100).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub collaboration: u32,
    pub problem_solving: u32,
    pub cultural_fit: u32,
}

impl ScoreBreakdown {
    pub const MAX_SKILLS: u32 = 60;
    pub const MAX_COLLABORATION: u32 = 15;
    pub const MAX_PROBLEM_SOLVING: u32 = 15;
    pub const MAX_CULTURAL_FIT: u32 = 10;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub score: Score,
    pub status: CandidateStatus,
    pub remark: String,
    pub job_title: String,
    /// Legacy job-title field kept for records imported from older clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    pub raw_text: Option<String>,
}

impl Candidate {
    /// Job title used for grouping: `jobTitle`, then legacy `position`, then "Other".
    pub fn effective_job_title(&self) -> &str {
        [Some(self.job_title.as_str()), self.position.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .unwrap_or("Other")
    }
}

/// Create command. Everything but `id`; optional fields are defaulted by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub score: Score,
    pub status: CandidateStatus,
    pub remark: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub flags: Option<Vec<String>>,
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub raw_text: Option<String>,
}

/// Update command. Only the fields listed here can be changed after creation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub score: Option<Score>,
    pub status: Option<CandidateStatus>,
    pub remark: Option<String>,
    pub job_title: Option<String>,
    pub flags: Option<Vec<String>>,
    pub score_breakdown: Option<ScoreBreakdown>,
}

impl CandidatePatch {
    /// Shallow merge: a provided breakdown replaces the stored one wholesale.
    pub fn apply_to(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(email) = self.email {
            candidate.email = email;
        }
        if let Some(score) = self.score {
            candidate.score = score;
        }
        if let Some(status) = self.status {
            candidate.status = status;
        }
        if let Some(remark) = self.remark {
            candidate.remark = remark;
        }
        if let Some(job_title) = self.job_title {
            candidate.job_title = job_title;
        }
        if let Some(flags) = self.flags {
            candidate.flags = flags;
        }
        if let Some(breakdown) = self.score_breakdown {
            candidate.score_breakdown = breakdown;
        }
    }
}
