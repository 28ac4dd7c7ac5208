use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use synova_db::Database;
use synova_engine::Engine;
use synova_types::Tier;
use synova_types::api::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

/// Explicitly constructed service state, injected into every handler.
pub struct AppStateInner {
    pub db: Database,
    pub engine: Engine,
    pub free_daily_quota: i64,
    pub simulate_latency: bool,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate input
    if req.email.len() < 3 || !req.email.contains('@') {
        return Err(ApiError::Validation("A valid email address is required.".into()));
    }
    if req.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters.".into(),
        ));
    }

    let db = state.clone();
    let email = req.email.clone();
    let existing = tokio::task::spawn_blocking(move || db.db.get_user_by_email(&email)).await??;
    if existing.is_some() {
        return Err(ApiError::EmailTaken);
    }

    let password_hash = hash_password(&req.password)?;
    let user_id = Uuid::new_v4();

    // New accounts always start on the free tier. The UNIQUE constraint on
    // email backstops the check above under concurrent registration.
    let db = state.clone();
    tokio::task::spawn_blocking(move || {
        db.db.create_user(
            &user_id.to_string(),
            &req.email,
            &password_hash,
            Tier::Terrestrial.as_str(),
        )
    })
    .await??;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let email = req.email.clone();
    let user = tokio::task::spawn_blocking(move || db.db.get_user_by_email(&email))
        .await??
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("corrupt user id '{}': {}", user.id, e)))?;
    let tier: Tier = user
        .tier
        .parse()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("{} for user {}", e, user.id)))?;

    Ok(Json(LoginResponse {
        user_id,
        tier,
        message_count: user.message_count,
    }))
}

/// Hash with Argon2id and a fresh OsRng salt.
fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("password hashing failed: {}", e)))
}

fn verify_password(password: &str, stored: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("corrupt stored password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_is_an_internal_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
