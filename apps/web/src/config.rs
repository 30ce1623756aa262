use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio backend, e.g. `http://localhost:8000`.
    pub backend_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub backend_timeout: Duration,
    /// How long an untouched session is kept in memory.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .context("Required environment variable 'BACKEND_URL' is not set")?;

        Ok(Config {
            backend_url,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            backend_timeout: Duration::from_secs(match lookup("BACKEND_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("BACKEND_TIMEOUT_SECS must be a number of seconds")?,
                None => 60,
            }),
            session_ttl: match lookup("SESSION_TTL_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .context("SESSION_TTL_SECS must be a positive number of seconds")?,
                None => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            },
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            backend_url: "http://backend.test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: 1024,
            backend_timeout: Duration::from_secs(5),
            session_ttl: Duration::from_secs(3600),
        }
    }
}
