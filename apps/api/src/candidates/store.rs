use sqlx::SqlitePool;

use crate::models::candidate::CandidateRow;
use crate::models::skills::encode_skills;

/// Inserts a freshly ingested candidate with an empty skill list and
/// returns the assigned id.
pub async fn insert_candidate(
    pool: &SqlitePool,
    name: &str,
    resume_text: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO candidates (name, resume_text, skills) VALUES (?, ?, ?)")
        .bind(name)
        .bind(resume_text)
        .bind(encode_skills(&[]))
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_candidate(pool: &SqlitePool, id: i64) -> Result<Option<CandidateRow>, sqlx::Error> {
    let row: Option<CandidateRow> =
        sqlx::query_as("SELECT id, name, resume_text, skills FROM candidates WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Overwrites the candidate's stored skill list. One UPDATE, so the
/// write is atomic on its own.
pub async fn update_candidate_skills(
    pool: &SqlitePool,
    id: i64,
    skills: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE candidates SET skills = ? WHERE id = ?")
        .bind(encode_skills(skills))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_insert_starts_with_empty_skills() {
        let pool = test_pool().await;
        let id = insert_candidate(&pool, "jane_resume.pdf", "text body")
            .await
            .unwrap();

        let row = get_candidate(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.name, "jane_resume.pdf");
        assert_eq!(row.resume_text, "text body");
        assert!(row.decoded_skills().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_skills_overwrites_in_place() {
        let pool = test_pool().await;
        let id = insert_candidate(&pool, "r.pdf", "text").await.unwrap();

        let skills = vec!["Python".to_string(), "SQL".to_string()];
        update_candidate_skills(&pool, id, &skills).await.unwrap();

        let row = get_candidate(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.decoded_skills().unwrap(), skills);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let pool = test_pool().await;
        assert!(get_candidate(&pool, 999).await.unwrap().is_none());
    }
}
