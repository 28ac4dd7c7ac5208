use std::time::Duration;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use uuid::Uuid;

use synova_types::api::{QueryRequest, QueryResponse};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::limits::{self, QuotaDecision};

/// The query pipeline: length check, quota check, generation, optional
/// simulated latency, persistence for logged-in callers. Every failure is
/// terminal for the request.
pub async fn process_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tier = req.tier;

    if req.query.chars().count() > tier.max_query_len() {
        return Err(ApiError::Validation(format!(
            "Query too long for {} tier. Maximum {} characters.",
            tier,
            tier.max_query_len()
        )));
    }

    if let Some(user_id) = req.user_id {
        let db = state.clone();
        let quota = state.free_daily_quota;
        let decision = tokio::task::spawn_blocking(move || {
            limits::check_quota(&db.db, &user_id.to_string(), tier, quota)
        })
        .await??;

        match decision {
            QuotaDecision::Allowed => {}
            QuotaDecision::Exhausted => return Err(ApiError::QuotaExceeded),
            QuotaDecision::UnknownUser => return Err(ApiError::UnknownUser),
        }
    }

    let reply = state.engine.generate(&req.query, tier);

    if state.simulate_latency {
        tokio::time::sleep(Duration::from_secs_f64(reply.processing_secs)).await;
    }

    // Anonymous queries are answered but never persisted.
    if let Some(user_id) = req.user_id {
        let db = state.clone();
        let message_id = Uuid::new_v4();
        let query_text = req.query;
        let response_text = reply.text.clone();
        tokio::task::spawn_blocking(move || {
            let uid = user_id.to_string();
            db.db.insert_message(
                &message_id.to_string(),
                &uid,
                &query_text,
                &response_text,
                tier.as_str(),
            )?;
            if tier.is_metered() {
                db.db.increment_message_count(&uid)?;
            }
            Ok::<_, anyhow::Error>(())
        })
        .await??;
    }

    Ok(Json(QueryResponse {
        response: reply.text,
        confidence: reply.confidence,
        tier,
        processing_time: reply.processing_secs,
        timestamp: Utc::now(),
    }))
}
