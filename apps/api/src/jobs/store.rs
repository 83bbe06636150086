use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::job::{Job, JobRow};

pub async fn list_jobs(pool: &SqlitePool) -> Result<Vec<Job>> {
    let rows: Vec<JobRow> = sqlx::query_as("SELECT id, title, description, skills FROM jobs")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(Job::try_from_row).collect()
}

pub async fn job_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await
}
