//! Per-category breakdown insights for the candidate pie chart and compare view.

use serde::Serialize;

use crate::dashboard::filter::ScoreBucket;
use crate::models::candidate::{Candidate, Score, ScoreBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Unscored,
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: Score) -> Self {
        match score.points().map(ScoreBucket::of) {
            None => ScoreTier::Unscored,
            Some(ScoreBucket::High) => ScoreTier::High,
            Some(ScoreBucket::Medium) => ScoreTier::Medium,
            Some(ScoreBucket::Low) => ScoreTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Skills,
    Collaboration,
    ProblemSolving,
    CulturalFit,
}

impl Category {
    const ALL: [Category; 4] = [
        Category::Skills,
        Category::Collaboration,
        Category::ProblemSolving,
        Category::CulturalFit,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::Skills => "Skills & Experience",
            Category::Collaboration => "Collaboration",
            Category::ProblemSolving => "Problem Solving",
            Category::CulturalFit => "Cultural Fit",
        }
    }

    fn max(self) -> u32 {
        match self {
            Category::Skills => ScoreBreakdown::MAX_SKILLS,
            Category::Collaboration => ScoreBreakdown::MAX_COLLABORATION,
            Category::ProblemSolving => ScoreBreakdown::MAX_PROBLEM_SOLVING,
            Category::CulturalFit => ScoreBreakdown::MAX_CULTURAL_FIT,
        }
    }

    fn value(self, breakdown: &ScoreBreakdown) -> u32 {
        match self {
            Category::Skills => breakdown.skills,
            Category::Collaboration => breakdown.collaboration,
            Category::ProblemSolving => breakdown.problem_solving,
            Category::CulturalFit => breakdown.cultural_fit,
        }
    }

    /// Bands: ≥90, ≥75, ≥50, below.
    fn insight(self, percentage: u32) -> &'static str {
        let band = match percentage {
            p if p >= 90 => 0,
            p if p >= 75 => 1,
            p if p >= 50 => 2,
            _ => 3,
        };
        let texts: [&str; 4] = match self {
            Category::Skills => [
                "Exceptional technical expertise",
                "Strong technical foundation",
                "Good skills, room for growth",
                "Needs skill development",
            ],
            Category::Collaboration => [
                "Outstanding teamwork abilities",
                "Good collaborative skills",
                "Adequate team skills",
                "Needs collaboration improvement",
            ],
            Category::ProblemSolving => [
                "Exceptional analytical thinking",
                "Strong problem-solving",
                "Good analytical skills",
                "Needs analytical development",
            ],
            Category::CulturalFit => [
                "Perfect cultural alignment",
                "Good cultural fit",
                "Reasonable fit",
                "Cultural alignment needed",
            ],
        };
        texts[band]
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryInsight {
    pub category: &'static str,
    pub score: u32,
    pub max: u32,
    /// Unfilled capacity, drawn as the empty pie slice.
    pub remaining: u32,
    pub percentage: u32,
    pub insight: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInsight {
    pub candidate: Candidate,
    pub tier: ScoreTier,
    pub categories: Vec<CategoryInsight>,
}

impl CandidateInsight {
    pub fn for_candidate(candidate: Candidate) -> Self {
        let tier = ScoreTier::of(candidate.score);
        let categories = breakdown_insights(&candidate.score_breakdown);
        Self {
            candidate,
            tier,
            categories,
        }
    }
}

pub fn breakdown_insights(breakdown: &ScoreBreakdown) -> Vec<CategoryInsight> {
    Category::ALL
        .iter()
        .map(|&category| {
            let score = category.value(breakdown);
            let max = category.max();
            let percentage = (score as f64 / max as f64 * 100.0).round() as u32;
            CategoryInsight {
                category: category.label(),
                score,
                max,
                remaining: max.saturating_sub(score),
                percentage,
                insight: category.insight(percentage),
            }
        })
        .collect()
}
