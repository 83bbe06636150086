pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates;
use crate::jobs;
use crate::matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(jobs::handlers::handle_list_jobs))
        .route(
            "/api/v1/candidates",
            post(candidates::handlers::handle_upload),
        )
        .route(
            "/api/v1/candidates/:id/analyze",
            post(candidates::handlers::handle_analyze),
        )
        .route(
            "/api/v1/candidates/:id/matches",
            post(matching::handlers::handle_generate_matches)
                .get(matching::handlers::handle_list_matches),
        )
        .with_state(state)
}
