use thiserror::Error;

use crate::models::candidate::{CandidatePatch, NewCandidate, ScoreBreakdown};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("'{0}' must not be blank")]
    Blank(&'static str),

    #[error("scoreBreakdown.{field} is {value}, maximum is {max}")]
    BreakdownOverMax {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Checks a create command before it reaches the store.
///
/// Rules:
/// - `name` and `email` contain non-whitespace text
/// - every breakdown component is within its maximum
///
/// The breakdown total is not compared with `score`.
pub fn validate_new_candidate(new: &NewCandidate) -> Result<(), ValidationError> {
    require_text("name", &new.name)?;
    require_text("email", &new.email)?;
    validate_breakdown(&new.score_breakdown)
}

/// Same rules as creation, applied only to the fields the patch carries.
pub fn validate_patch(patch: &CandidatePatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        require_text("name", name)?;
    }
    if let Some(email) = &patch.email {
        require_text("email", email)?;
    }
    if let Some(breakdown) = &patch.score_breakdown {
        validate_breakdown(breakdown)?;
    }
    Ok(())
}

pub fn validate_breakdown(breakdown: &ScoreBreakdown) -> Result<(), ValidationError> {
    let components = [
        ("skills", breakdown.skills, ScoreBreakdown::MAX_SKILLS),
        (
            "collaboration",
            breakdown.collaboration,
            ScoreBreakdown::MAX_COLLABORATION,
        ),
        (
            "problemSolving",
            breakdown.problem_solving,
            ScoreBreakdown::MAX_PROBLEM_SOLVING,
        ),
        (
            "culturalFit",
            breakdown.cultural_fit,
            ScoreBreakdown::MAX_CULTURAL_FIT,
        ),
    ];

    for (field, value, max) in components {
        if value > max {
            return Err(ValidationError::BreakdownOverMax { field, value, max });
        }
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}
