//! One-time demo-data seed: fetches placeholder posts, dresses them up
//! with a deterministic skill template, runs skill extraction, and inserts
//! the lot in a single all-or-nothing transaction.

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::extraction::SkillExtractor;
use crate::jobs::store::job_count;
use crate::models::skills::encode_skills;

/// Fixed size of the seed set: the first N posts from the placeholder API.
const SEED_POST_COUNT: usize = 10;

const COVER_SENTENCE: &str = "We are looking for a motivated engineer to join our team.";

/// Round-robin skill templates assigned by `post_index % 4`. Demo-data
/// enrichment only — gives the extractor something concrete to find.
const SKILL_TEMPLATES: [&[&str]; 4] = [
    &["Python", "SQL", "Django"],
    &["JavaScript", "React", "Node.js"],
    &["Java", "Spring", "AWS"],
    &["C++", "Linux", "Docker"],
];

/// One record from the seed source, `{id, title, body}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPost {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Seeds the jobs table if and only if it is empty. A failed sweep rolls
/// back entirely, so the next process start sees an empty table and
/// retries. Returns whether seeding ran.
pub async fn seed_if_empty(
    pool: &SqlitePool,
    http: &reqwest::Client,
    seed_url: &str,
    extractor: &dyn SkillExtractor,
) -> Result<bool> {
    if job_count(pool).await? > 0 {
        info!("Jobs table already populated, skipping seed");
        return Ok(false);
    }

    let posts = fetch_seed_posts(http, seed_url).await?;
    populate_jobs(pool, &posts, extractor).await?;

    info!("Seeded {} job(s) from {seed_url}", posts.len());
    Ok(true)
}

/// Fetches the seed posts and keeps the first `SEED_POST_COUNT`.
pub async fn fetch_seed_posts(http: &reqwest::Client, url: &str) -> Result<Vec<SeedPost>> {
    let mut posts: Vec<SeedPost> = http
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("seed fetch from {url} failed"))?
        .json()
        .await
        .context("seed response was not a JSON list of posts")?;

    posts.truncate(SEED_POST_COUNT);
    if posts.is_empty() {
        warn!("Seed source returned no posts");
    }
    Ok(posts)
}

/// Builds the enhanced description handed to the skill extractor. The
/// original, unenhanced body is what gets stored as the job description.
pub fn enhance_description(post: &SeedPost, index: usize) -> String {
    let template = SKILL_TEMPLATES[index % SKILL_TEMPLATES.len()];
    format!(
        "{COVER_SENTENCE} Required skills: {}. {}",
        template.join(", "),
        post.body
    )
}

/// Extracts skills for every post, then inserts all rows in one
/// transaction. Job ids come from the seed source, not AUTOINCREMENT.
pub async fn populate_jobs(
    pool: &SqlitePool,
    posts: &[SeedPost],
    extractor: &dyn SkillExtractor,
) -> Result<()> {
    let mut extracted = Vec::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        let enhanced = enhance_description(post, index);
        extracted.push(extractor.extract_skills(&enhanced).await);
    }

    let mut tx = pool.begin().await?;
    for (post, skills) in posts.iter().zip(&extracted) {
        sqlx::query("INSERT INTO jobs (id, title, description, skills) VALUES (?, ?, ?, ?)")
            .bind(post.id)
            .bind(&post.title)
            .bind(&post.body)
            .bind(encode_skills(skills))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::db::test_pool;
    use crate::jobs::store::list_jobs;

    /// Extractor stub: echoes back whichever template skills appear in
    /// the text, never hits the network.
    struct TemplateEchoExtractor;

    #[async_trait]
    impl SkillExtractor for TemplateEchoExtractor {
        async fn extract_skills(&self, text: &str) -> Vec<String> {
            SKILL_TEMPLATES
                .iter()
                .flat_map(|t| t.iter())
                .filter(|skill| text.contains(**skill))
                .map(|s| s.to_string())
                .collect()
        }
    }

    fn post(id: i64, title: &str, body: &str) -> SeedPost {
        SeedPost {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_enhancement_round_robins_templates() {
        let p = post(1, "t", "body");
        assert!(enhance_description(&p, 0).contains("Python, SQL, Django"));
        assert!(enhance_description(&p, 1).contains("JavaScript, React, Node.js"));
        assert!(enhance_description(&p, 2).contains("Java, Spring, AWS"));
        assert!(enhance_description(&p, 3).contains("C++, Linux, Docker"));
        // wraps around
        assert!(enhance_description(&p, 4).contains("Python, SQL, Django"));
    }

    #[test]
    fn test_enhancement_keeps_original_body() {
        let p = post(1, "t", "original body text");
        assert!(enhance_description(&p, 0).contains("original body text"));
    }

    #[tokio::test]
    async fn test_populate_stores_original_body_with_extracted_skills() {
        let pool = test_pool().await;
        let posts = vec![post(1, "First", "alpha"), post(2, "Second", "beta")];

        populate_jobs(&pool, &posts, &TemplateEchoExtractor)
            .await
            .unwrap();

        let jobs = list_jobs(&pool).await.unwrap();
        assert_eq!(jobs.len(), 2);
        // description is the unenhanced body
        assert_eq!(jobs[0].description, "alpha");
        // skills come from the enhanced text: template 0 for index 0
        assert_eq!(jobs[0].skills, vec!["Python", "SQL", "Django"]);
        assert_eq!(jobs[1].skills, vec!["JavaScript", "React", "Node.js"]);
    }

    #[tokio::test]
    async fn test_populate_uses_seed_assigned_ids() {
        let pool = test_pool().await;
        populate_jobs(&pool, &[post(42, "T", "b")], &TemplateEchoExtractor)
            .await
            .unwrap();

        let jobs = list_jobs(&pool).await.unwrap();
        assert_eq!(jobs[0].id, 42);
    }

    #[tokio::test]
    async fn test_seed_skips_when_table_populated() {
        let pool = test_pool().await;
        populate_jobs(&pool, &[post(1, "T", "b")], &TemplateEchoExtractor)
            .await
            .unwrap();

        // Non-empty table: returns before ever touching the seed URL.
        let http = reqwest::Client::new();
        let seeded = seed_if_empty(&pool, &http, "http://invalid.localhost/posts", &TemplateEchoExtractor)
            .await
            .unwrap();
        assert!(!seeded);
        assert_eq!(list_jobs(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_populate_failure_rolls_back_whole_sweep() {
        let pool = test_pool().await;
        // Duplicate primary key forces the second insert to fail.
        let posts = vec![post(1, "A", "a"), post(1, "B", "b")];

        let result = populate_jobs(&pool, &posts, &TemplateEchoExtractor).await;
        assert!(result.is_err());
        assert!(list_jobs(&pool).await.unwrap().is_empty());
    }
}
