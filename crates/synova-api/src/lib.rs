pub mod auth;
pub mod error;
pub mod limits;
pub mod query;
pub mod stats;

use axum::{
    Router,
    routing::{get, post},
};

use crate::auth::AppState;

/// The full route table over injected state. Middleware layers (CORS,
/// request tracing) are the server binary's concern.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(stats::root))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/query", post(query::process_query))
        .route("/api/health", get(stats::health))
        .route("/api/stats", get(stats::stats))
        .with_state(state)
}
