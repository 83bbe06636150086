use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at
/// startup. Business logic never reads the process environment directly;
/// everything it needs is handed down from this struct.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Absent key is allowed: skill extraction degrades to empty lists
    /// instead of refusing to start.
    pub openai_api_key: Option<String>,
    pub seed_posts_url: String,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_DATABASE_URL: &str = "sqlite://jobs.db";
const DEFAULT_SEED_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            seed_posts_url: std::env::var("SEED_POSTS_URL")
                .unwrap_or_else(|_| DEFAULT_SEED_POSTS_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
