//! Environment-driven configuration.

use std::env;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{ClientError, Result};

pub const ENV_BASE_URL: &str = "CONFLUENCE_BASE_URL";
pub const ENV_EMAIL: &str = "CONFLUENCE_EMAIL";
pub const ENV_API_TOKEN: &str = "CONFLUENCE_API_TOKEN";

/// Validated connection settings for one Confluence site.
///
/// `base_url` points at the wiki root (for cloud sites typically
/// `https://<site>.atlassian.net/wiki`); API paths are appended to it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl ClientConfig {
    /// Builds a config from `CONFLUENCE_BASE_URL`, `CONFLUENCE_EMAIL` and
    /// `CONFLUENCE_API_TOKEN`, naming the variable in every failure.
    pub fn from_env() -> Result<Self> {
        Self::new(
            require_env(ENV_BASE_URL)?,
            require_env(ENV_EMAIL)?,
            require_env(ENV_API_TOKEN)?,
        )
    }

    /// Validates and normalizes the settings.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            email: email.into(),
            api_token: api_token.into(),
        })
    }

    /// The `Authorization` header value for this site.
    pub fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

fn require_env(var: &'static str) -> Result<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ClientError::MissingEnv(var)),
    }
}

fn normalize_base_url(url: String) -> Result<String> {
    let trimmed = url.trim();
    if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
        return Err(ClientError::InvalidBaseUrl {
            url,
            reason: "expected an http(s) URL".to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
