use sqlx::FromRow;

/// A persisted match row joined with the job title, as read back for
/// listing. Skill columns are raw JSON text, decoded at the boundary.
#[derive(Debug, Clone, FromRow)]
pub struct MatchRow {
    pub job_id: i64,
    pub job_title: String,
    pub score: i64,
    pub matched_skills: String,
    pub missing_skills: String,
}
