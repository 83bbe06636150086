use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::candidates::store::get_candidate;
use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::matching::engine::generate_matches;
use crate::matching::store::{list_matches, replace_matches};
use crate::models::matches::MatchRow;
use crate::models::skills::decode_skills;
use crate::state::AppState;

/// One match as returned to clients, highest score first.
#[derive(Serialize)]
pub struct MatchEntry {
    pub job_id: i64,
    pub job_title: String,
    pub score: i64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl MatchEntry {
    fn try_from_row(row: MatchRow) -> Result<Self, AppError> {
        Ok(MatchEntry {
            job_id: row.job_id,
            job_title: row.job_title,
            score: row.score,
            matched_skills: decode_skills(&row.matched_skills)?,
            missing_skills: decode_skills(&row.missing_skills)?,
        })
    }
}

/// POST /api/v1/candidates/:id/matches
///
/// Recomputes the candidate's matches against every stored job and
/// replaces the persisted set, then returns it.
pub async fn handle_generate_matches(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<MatchEntry>>, AppError> {
    let candidate = get_candidate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    let candidate_skills = candidate.decoded_skills()?;
    if candidate_skills.is_empty() {
        return Err(AppError::Validation(
            "Candidate has no skills to match against; run analyze first".to_string(),
        ));
    }

    let jobs = list_jobs(&state.db).await?;
    let outcomes = generate_matches(&candidate_skills, &jobs);
    replace_matches(&state.db, id, &outcomes).await?;

    fetch_match_entries(&state, id).await
}

/// GET /api/v1/candidates/:id/matches
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<MatchEntry>>, AppError> {
    get_candidate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    fetch_match_entries(&state, id).await
}

async fn fetch_match_entries(
    state: &AppState,
    candidate_id: i64,
) -> Result<Json<Vec<MatchEntry>>, AppError> {
    let rows = list_matches(&state.db, candidate_id).await?;
    let entries = rows
        .into_iter()
        .map(MatchEntry::try_from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(entries))
}
