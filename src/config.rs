use std::path::PathBuf;
use std::time::Duration;

use dotenvy::var;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub backend_url: String,
    pub auth_url: String,
    pub auth_api_key: Option<String>,
    pub request_timeout: Duration,
    /// When set, transactions come from this JSON file instead of the backend.
    pub transactions_fixture: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url =
            var("XS_BACKEND_URL").map_err(|_| ConfigError::Missing("XS_BACKEND_URL"))?;
        let auth_url = var("XS_AUTH_URL").unwrap_or_else(|_| backend_url.clone());
        let auth_api_key = var("XS_AUTH_API_KEY").ok().filter(|v| !v.is_empty());
        let request_timeout = match var("XS_REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid("XS_REQUEST_TIMEOUT_SECS", v))?,
            Err(_) => Duration::from_secs(10),
        };
        let transactions_fixture = var("XS_TRANSACTIONS_FIXTURE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            backend_url,
            auth_url,
            auth_api_key,
            request_timeout,
            transactions_fixture,
        })
    }
}
