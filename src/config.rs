use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("OPENAI_API_KEY must be set")?;

        let base_url = lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {}", p))?,
            None => 3000,
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(s) => Some(Duration::from_secs(
                s.parse::<u64>()
                    .with_context(|| format!("invalid UPSTREAM_TIMEOUT_SECS: {}", s))?,
            )),
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            host,
            port,
            upstream_timeout,
        })
    }
}
