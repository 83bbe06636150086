use std::sync::Arc;

use sqlx::SqlitePool;

use crate::extraction::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pluggable skill extractor. Default: `LlmSkillExtractor`; tests
    /// swap in a stub so nothing touches the network.
    pub extractor: Arc<dyn SkillExtractor>,
}
