use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_LOG_FILTER: &str = "info";

/// Client configuration, read once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the resume backend (`RESUME_BACKEND_URL`).
    pub backend_url: Url,
    /// Level for this crate's logs (`RESUME_UPLOADER_LOG`), used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let default = Self::default();
        let backend_url = match env::var("RESUME_BACKEND_URL") {
            Ok(raw) => Self::parse_backend_url(&raw)?,
            Err(_) => default.backend_url,
        };

        Ok(Self {
            backend_url,
            log_filter: env::var("RESUME_UPLOADER_LOG").unwrap_or(default.log_filter),
        })
    }

    pub fn with_backend_url(raw: &str) -> Result<Self> {
        Ok(Self {
            backend_url: Self::parse_backend_url(raw)?,
            ..Self::default()
        })
    }

    fn parse_backend_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim())
            .with_context(|| format!("RESUME_BACKEND_URL is not a valid URL: {raw}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("RESUME_BACKEND_URL must use http or https, got {}", url.scheme());
        }
        Ok(url)
    }
}
