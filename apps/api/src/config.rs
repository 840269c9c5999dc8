use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies accepted by the résumé endpoints.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)
                .context("MAX_BODY_BYTES must be a byte count")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        Err(_) => Ok(default),
    }
}
