//! Core match scoring — pure, deterministic, fully testable.
//!
//! Comparison is exact-match and case-sensitive: "Python" and "python"
//! are distinct skills. Rounding is half-up (f64 `round`, half away from
//! zero). Both choices are deliberate and pinned by tests below.

use std::collections::HashSet;

use crate::models::job::Job;

/// A match is kept only when its score is strictly above this threshold.
/// Jobs at or below it produce no row at all, not a low-score row.
pub const MIN_MATCH_SCORE: i64 = 20;

/// One scored job for one candidate, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub job_id: i64,
    pub score: i64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Scores every job against the candidate's skill set.
///
/// Per job: the skill list is deduplicated (first occurrence wins, order
/// preserved) and partitioned into matched/missing against the candidate
/// set, so matched ∪ missing is exactly the job's skill set and the two
/// are disjoint. score = round(100 · |matched| / |job skills|).
///
/// Jobs with an empty skill set are unscoreable and skipped. Outcomes
/// scoring ≤ `MIN_MATCH_SCORE` are dropped. Callers enforce the
/// non-empty-candidate precondition; an empty candidate set here simply
/// produces no outcomes.
pub fn generate_matches(candidate_skills: &[String], jobs: &[Job]) -> Vec<MatchOutcome> {
    let candidate: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();

    let mut outcomes = Vec::new();

    for job in jobs {
        let job_skills = dedup_preserving_order(&job.skills);
        if job_skills.is_empty() {
            continue;
        }

        let (matched, missing): (Vec<&str>, Vec<&str>) = job_skills
            .iter()
            .copied()
            .partition(|skill| candidate.contains(skill));

        let score = (100.0 * matched.len() as f64 / job_skills.len() as f64).round() as i64;
        if score <= MIN_MATCH_SCORE {
            continue;
        }

        outcomes.push(MatchOutcome {
            job_id: job.id,
            score,
            matched_skills: matched.into_iter().map(String::from).collect(),
            missing_skills: missing.into_iter().map(String::from).collect(),
        });
    }

    outcomes
}

fn dedup_preserving_order(skills: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(String::as_str)
        .filter(|s| seen.insert(*s))
        .collect()
}
