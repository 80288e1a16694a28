//! Placeholder candidate drafting from extracted resume text.
//!
//! Deliberately naive: first regex email match, first non-empty line as the
//! name, substring keyword scan for skills. Drafts always land in the attention
//! queue unscored.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::candidate::{CandidateStatus, NewCandidate, Score, ScoreBreakdown};

pub const EMAIL_NOT_FOUND: &str = "email-not-found@unknown.com";
pub const NOT_SCORED_FLAG: &str = "Not Scored Yet";
const UNKNOWN_NAME: &str = "Unknown Candidate";

/// Characters of extracted text kept on the record for reference.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 500;

/// Matched case-insensitively, reported in this order.
pub const SKILL_KEYWORDS: &[&str] = &[
    "react",
    "javascript",
    "python",
    "java",
    "node.js",
    "angular",
    "vue",
    "sql",
    "aws",
    "docker",
];

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("email pattern compiles"))
}

pub fn extract_email(text: &str) -> Option<&str> {
    email_pattern().find(text).map(|m| m.as_str())
}

/// First line with visible content, else the filename without its extension.
pub fn guess_name(text: &str, filename: &str) -> String {
    if let Some(line) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
        return line.to_string();
    }
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Substring scan, so "javascript" also reports "java".
pub fn detect_skills(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect()
}

fn preview(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(text.chars().take(RAW_TEXT_PREVIEW_CHARS).collect())
}

/// Builds the draft record posted to the store for one resume.
pub fn extract_candidate_info(text: &str, filename: &str) -> NewCandidate {
    let skills = detect_skills(text);
    let skills_summary = if skills.is_empty() {
        "None detected".to_string()
    } else {
        skills.join(", ")
    };

    NewCandidate {
        name: guess_name(text, filename),
        email: extract_email(text).unwrap_or(EMAIL_NOT_FOUND).to_string(),
        score: Score::Unscored,
        status: CandidateStatus::Attention,
        remark: format!(
            "Uploaded resume. Skills detected: {skills_summary}. Requires manual scoring."
        ),
        job_title: None,
        position: None,
        flags: Some(vec![NOT_SCORED_FLAG.to_string()]),
        score_breakdown: ScoreBreakdown::default(),
        raw_text: preview(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\n\n  Jane Doe  \nSenior Engineer\njane.doe@mail.example.com | +1 555 0100\n\
        Experience with React, Node.js and PostgreSQL (SQL). Deployed on AWS with Docker.";

    #[test]
    fn test_email_first_match() {
        let text = "contact: first@one.com, second@two.org";
        assert_eq!(extract_email(text), Some("first@one.com"));
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_name_is_first_non_empty_line() {
        assert_eq!(guess_name(RESUME, "resume.pdf"), "Jane Doe");
    }

    #[test]
    fn test_name_falls_back_to_filename_stem() {
        assert_eq!(guess_name("   \n\n", "john_smith_cv.pdf"), "john_smith_cv");
        assert_eq!(guess_name("", "Résumé Final.PDF"), "Résumé Final");
        assert_eq!(guess_name("", ""), UNKNOWN_NAME);
    }

    #[test]
    fn test_skills_in_keyword_order() {
        assert_eq!(detect_skills(RESUME), vec!["react", "node.js", "sql", "aws", "docker"]);
    }

    #[test]
    fn test_javascript_also_matches_java() {
        assert_eq!(detect_skills("JavaScript only"), vec!["javascript", "java"]);
    }

    #[test]
    fn test_draft_shape() {
        let draft = extract_candidate_info(RESUME, "jane.pdf");
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.email, "jane.doe@mail.example.com");
        assert_eq!(draft.score, Score::Unscored);
        assert_eq!(draft.status, CandidateStatus::Attention);
        assert_eq!(draft.flags, Some(vec![NOT_SCORED_FLAG.to_string()]));
        assert_eq!(draft.score_breakdown, ScoreBreakdown::default());
        assert_eq!(
            draft.remark,
            "Uploaded resume. Skills detected: react, node.js, sql, aws, docker. Requires manual scoring."
        );
        assert_eq!(draft.raw_text.as_deref(), Some(RESUME));
    }

    #[test]
    fn test_draft_without_matches() {
        let draft = extract_candidate_info("", "blank.pdf");
        assert_eq!(draft.name, "blank");
        assert_eq!(draft.email, EMAIL_NOT_FOUND);
        assert!(draft.remark.contains("None detected"));
        assert!(draft.raw_text.is_none());
    }

    #[test]
    fn test_raw_text_truncated_by_chars() {
        let text = "é".repeat(RAW_TEXT_PREVIEW_CHARS + 50);
        let draft = extract_candidate_info(&text, "long.pdf");
        assert_eq!(
            draft.raw_text.unwrap().chars().count(),
            RAW_TEXT_PREVIEW_CHARS
        );
    }
}
