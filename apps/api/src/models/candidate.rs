use anyhow::Result;
use sqlx::FromRow;

use crate::models::skills::decode_skills;

/// An uploaded candidate as stored. `skills` is the raw JSON-encoded
/// column; it stays `[]` until the analyze operation runs.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: i64,
    pub name: String,
    pub resume_text: String,
    pub skills: String,
}

impl CandidateRow {
    pub fn decoded_skills(&self) -> Result<Vec<String>> {
        decode_skills(&self.skills)
    }
}
