use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Server configuration, read once at startup from the environment
/// (with `.env` loading handled by the caller).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Daily message quota for the free tier.
    pub free_daily_quota: i64,
    /// When on, query responses are delayed by the sampled processing time.
    pub simulate_latency: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env::var("SYNOVA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = env::var("SYNOVA_PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .context("SYNOVA_PORT must be a port number")?;
        let db_path = PathBuf::from(env::var("SYNOVA_DB_PATH").unwrap_or_else(|_| "synova.db".into()));
        let free_daily_quota = env::var("SYNOVA_FREE_DAILY_QUOTA")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .context("SYNOVA_FREE_DAILY_QUOTA must be an integer")?;
        let simulate_latency = env::var("SYNOVA_SIMULATE_LATENCY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            db_path,
            free_daily_quota,
            simulate_latency,
        })
    }
}
