mod candidates;
mod config;
mod db;
mod errors;
mod extraction;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::extraction::LlmSkillExtractor;
use crate::jobs::seed::seed_if_empty;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    // Initialize LLM-backed skill extractor
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY not set; skill extraction will return empty lists");
    }
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let extractor = Arc::new(LlmSkillExtractor::new(llm));

    // One-time demo seed, before accepting traffic. A failure is logged
    // and rolled back; the next start retries against the empty table.
    let http = reqwest::Client::new();
    if let Err(e) = seed_if_empty(&pool, &http, &config.seed_posts_url, extractor.as_ref()).await {
        warn!("Job seed population failed, continuing with empty jobs table: {e:?}");
    }

    let state = AppState {
        db: pool,
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // localhost frontend during development

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
