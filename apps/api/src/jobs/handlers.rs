use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::models::job::Job;
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = list_jobs(&state.db).await?;
    Ok(Json(jobs))
}
