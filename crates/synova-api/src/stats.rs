use std::collections::HashMap;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use synova_types::api::StatsResponse;

use crate::auth::AppState;
use crate::error::ApiError;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the Synova API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness plus a storage probe.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.clone();
    let probe = tokio::task::spawn_blocking(move || {
        db.db.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
    })
    .await;

    let database = match probe {
        Ok(Ok(())) => "healthy",
        _ => "unhealthy",
    };
    let status = if database == "healthy" { "healthy" } else { "degraded" };

    Json(json!({
        "status": status,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let (tiers, total_messages) = tokio::task::spawn_blocking(move || {
        let tiers = db.db.count_users_by_tier()?;
        let total = db.db.count_messages()?;
        Ok::<_, anyhow::Error>((tiers, total))
    })
    .await??;

    Ok(Json(StatsResponse {
        users_by_tier: tiers.into_iter().collect::<HashMap<_, _>>(),
        total_messages,
        status: "operational",
    }))
}
