use sqlx::SqlitePool;
use tracing::info;

use crate::matching::engine::MatchOutcome;
use crate::models::matches::MatchRow;
use crate::models::skills::encode_skills;

/// Replaces the candidate's match set: deletes every prior row, inserts
/// the new outcomes, all in one transaction. A failure partway rolls back
/// and leaves the previous match set intact.
pub async fn replace_matches(
    pool: &SqlitePool,
    candidate_id: i64,
    outcomes: &[MatchOutcome],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM matches WHERE candidate_id = ?")
        .bind(candidate_id)
        .execute(&mut *tx)
        .await?;

    for outcome in outcomes {
        sqlx::query(
            r#"
            INSERT INTO matches (candidate_id, job_id, score, matched_skills, missing_skills)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(candidate_id)
        .bind(outcome.job_id)
        .bind(outcome.score)
        .bind(encode_skills(&outcome.matched_skills))
        .bind(encode_skills(&outcome.missing_skills))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Stored {} match(es) for candidate {candidate_id}",
        outcomes.len()
    );
    Ok(())
}

/// Lists the candidate's persisted matches joined with job titles,
/// highest score first.
pub async fn list_matches(
    pool: &SqlitePool,
    candidate_id: i64,
) -> Result<Vec<MatchRow>, sqlx::Error> {
    let rows: Vec<MatchRow> = sqlx::query_as(
        r#"
        SELECT m.job_id, j.title AS job_title, m.score, m.matched_skills, m.missing_skills
        FROM matches m
        JOIN jobs j ON j.id = m.job_id
        WHERE m.candidate_id = ?
        ORDER BY m.score DESC
        "#,
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::skills::decode_skills;

    async fn insert_job(pool: &SqlitePool, id: i64, title: &str, skills: &[&str]) {
        let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
        sqlx::query("INSERT INTO jobs (id, title, description, skills) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(title)
            .bind("desc")
            .bind(encode_skills(&skills))
            .execute(pool)
            .await
            .unwrap();
    }

    fn outcome(job_id: i64, score: i64, matched: &[&str], missing: &[&str]) -> MatchOutcome {
        MatchOutcome {
            job_id,
            score,
            matched_skills: matched.iter().map(|s| s.to_string()).collect(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_replace_then_list_orders_by_score_desc() {
        let pool = test_pool().await;
        insert_job(&pool, 1, "Backend", &["Python", "SQL"]).await;
        insert_job(&pool, 2, "Frontend", &["React"]).await;

        let outcomes = vec![
            outcome(1, 50, &["Python"], &["SQL"]),
            outcome(2, 100, &["React"], &[]),
        ];
        replace_matches(&pool, 7, &outcomes).await.unwrap();

        let rows = list_matches(&pool, 7).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].job_id, 2);
        assert_eq!(rows[0].score, 100);
        assert_eq!(rows[1].job_id, 1);
        assert_eq!(decode_skills(&rows[1].matched_skills).unwrap(), ["Python"]);
        assert_eq!(decode_skills(&rows[1].missing_skills).unwrap(), ["SQL"]);
    }

    #[tokio::test]
    async fn test_rerun_replaces_instead_of_appending() {
        let pool = test_pool().await;
        insert_job(&pool, 1, "Backend", &["Python"]).await;

        let outcomes = vec![outcome(1, 100, &["Python"], &[])];
        replace_matches(&pool, 7, &outcomes).await.unwrap();
        replace_matches(&pool, 7, &outcomes).await.unwrap();

        let rows = list_matches(&pool, 7).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score, 100);
    }

    #[tokio::test]
    async fn test_replace_with_empty_set_clears_prior_matches() {
        let pool = test_pool().await;
        insert_job(&pool, 1, "Backend", &["Python"]).await;

        replace_matches(&pool, 7, &[outcome(1, 100, &["Python"], &[])])
            .await
            .unwrap();
        replace_matches(&pool, 7, &[]).await.unwrap();

        assert!(list_matches(&pool, 7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_other_candidates_matches_untouched() {
        let pool = test_pool().await;
        insert_job(&pool, 1, "Backend", &["Python"]).await;

        replace_matches(&pool, 7, &[outcome(1, 100, &["Python"], &[])])
            .await
            .unwrap();
        replace_matches(&pool, 8, &[outcome(1, 100, &["Python"], &[])])
            .await
            .unwrap();
        replace_matches(&pool, 7, &[]).await.unwrap();

        assert_eq!(list_matches(&pool, 8).await.unwrap().len(), 1);
    }
}
