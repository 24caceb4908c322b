//! Server-side configuration loaded from environment variables
//!
//! The shell itself reads no configuration; only server functions do.

use anyhow::{Context, Result};

/// Endpoint used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8080/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        #[cfg(feature = "server")]
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but falls back to defaults on invalid values
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
            Self::default()
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_url(&api_url).context("API_URL must be an http(s) URL")?;

        Ok(Self { api_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        anyhow::bail!("unsupported URL '{}'", url)
    }
}
