use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tier::Tier;

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub tier: Tier,
    pub message_count: i64,
}

// -- Queries --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub tier: Tier,
    /// Present when the caller is logged in; queries without it are answered
    /// but never persisted.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
    pub confidence: f64,
    pub tier: Tier,
    /// Sampled processing duration in seconds.
    pub processing_time: f64,
    pub timestamp: DateTime<Utc>,
}

// -- Stats --

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub users_by_tier: HashMap<String, i64>,
    pub total_messages: i64,
    pub status: &'static str,
}
