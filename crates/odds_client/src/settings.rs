use std::env;

use url::Url;

pub const BASE_URL_ENV: &str = "ODDS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const FETCH_PATH: &str = "/api/odds/fetch";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid base url {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SettingsError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&trimmed).map_err(|err| SettingsError::InvalidBaseUrl {
            value: raw.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidBaseUrl {
                value: raw,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(Self { base_url: trimmed })
    }

    /// Reads `ODDS_API_BASE_URL`, falling back to the local development backend.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        match lookup(BASE_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, FETCH_PATH)
    }
}
