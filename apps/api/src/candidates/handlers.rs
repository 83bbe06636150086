use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;

use crate::candidates::ingest::{extract_resume_text, preview_text};
use crate::candidates::store::{get_candidate, insert_candidate, update_candidate_skills};
use crate::errors::AppError;
use crate::state::AppState;

/// Length of the resume text preview returned after upload.
const PREVIEW_CHARS: usize = 500;

#[derive(Serialize)]
pub struct UploadResponse {
    pub candidate_id: i64,
    pub name: String,
    pub resume_text: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub candidate_id: i64,
    pub name: String,
    pub skills: Vec<String>,
}

/// POST /api/v1/candidates
///
/// Multipart upload of a PDF résumé. Creates the candidate with the full
/// extracted text and an empty skill list; analysis is a separate call so
/// the client can inspect the text before spending a model call.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if let Some(file_name) = field.file_name().map(str::to_string) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, bytes.to_vec()));
            break;
        }
    }

    let (name, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file field in upload".to_string()))?;

    let resume_text = extract_resume_text(bytes).await?;
    let candidate_id = insert_candidate(&state.db, &name, &resume_text).await?;

    Ok(Json(UploadResponse {
        candidate_id,
        name,
        resume_text: preview_text(&resume_text, PREVIEW_CHARS),
    }))
}

/// POST /api/v1/candidates/:id/analyze
///
/// Runs skill extraction over the stored resume text and persists the
/// result on the candidate.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let candidate = get_candidate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    if candidate.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Candidate has no resume text to analyze".to_string(),
        ));
    }

    let skills = state.extractor.extract_skills(&candidate.resume_text).await;
    update_candidate_skills(&state.db, id, &skills).await?;

    Ok(Json(AnalyzeResponse {
        candidate_id: candidate.id,
        name: candidate.name,
        skills,
    }))
}
