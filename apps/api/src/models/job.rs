use anyhow::Result;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::skills::decode_skills;

/// A job posting as stored. `skills` is the raw JSON-encoded column;
/// decode at the boundary via [`Job::try_from_row`].
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skills: String,
}

/// A job posting in the domain, with its skill list decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl Job {
    pub fn try_from_row(row: JobRow) -> Result<Self> {
        let skills = decode_skills(&row.skills)?;
        Ok(Job {
            id: row.id,
            title: row.title,
            description: row.description,
            skills,
        })
    }
}
