//! Sample candidates loaded at startup when `SEED_SAMPLE_DATA` is on.

use crate::models::candidate::{CandidateStatus, NewCandidate, Score, ScoreBreakdown};

#[allow(clippy::too_many_arguments)]
fn sample(
    name: &str,
    email: &str,
    score: u32,
    status: CandidateStatus,
    remark: &str,
    job_title: &str,
    flags: &[&str],
    breakdown: [u32; 4],
) -> NewCandidate {
    let [skills, collaboration, problem_solving, cultural_fit] = breakdown;
    NewCandidate {
        name: name.to_string(),
        email: email.to_string(),
        score: Score::Points(score),
        status,
        remark: remark.to_string(),
        job_title: Some(job_title.to_string()),
        position: None,
        flags: Some(flags.iter().map(|f| f.to_string()).collect()),
        score_breakdown: ScoreBreakdown {
            skills,
            collaboration,
            problem_solving,
            cultural_fit,
        },
        raw_text: None,
    }
}

pub fn sample_candidates() -> Vec<NewCandidate> {
    vec![
        sample(
            "Lee Chong Wai",
            "cw.lee@email.com",
            92,
            CandidateStatus::Qualified,
            "Strong match: React, Node.js, 9+ years experience. Top 3 in 6 international hackathon.",
            "Senior Software Engineer",
            &[],
            [55, 14, 13, 10],
        ),
        sample(
            "Tung bin Sahur",
            "tttsahur.perfect@email.com",
            100,
            CandidateStatus::Attention,
            "Perfect score anomaly. Resume language patterns suggest AI generation. LinkedIn verification pending.",
            "Frontend Developer",
            &["AI Generated"],
            [60, 15, 15, 10],
        ),
        sample(
            "Alex Sander",
            "alex.sander.apply@email.com",
            23,
            CandidateStatus::Attention,
            "Generic template detected. Skills mismatch: PHP/WordPress for React position. High application volume pattern.",
            "Product Manager",
            &["Spam"],
            [10, 5, 5, 3],
        ),
        sample(
            "May Lee",
            "maylee.beautiful@email.com",
            78,
            CandidateStatus::Attention,
            "LinkedIn profile mismatch: Different company history. Education verification failed. Strong technical skills otherwise.",
            "UX Designer",
            &["Fraud Risk"],
            [45, 12, 12, 9],
        ),
    ]
}
