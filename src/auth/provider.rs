use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;

use crate::models::User;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("parse error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn get_current_user(&self, access_token: &str) -> Result<User, AuthError>;
}

/// Resolves the user behind an access token via `GET {auth_url}/auth/v1/user`.
#[derive(Clone)]
pub struct HttpAuthProvider {
    url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpAuthProvider {
    pub fn new(
        auth_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(Self {
            url: format!("{}/auth/v1/user", auth_url.trim_end_matches('/')),
            api_key,
            client,
        })
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn get_current_user(&self, access_token: &str) -> Result<User, AuthError> {
        let mut req = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", access_token));
        if let Some(key) = &self.api_key {
            req = req.header("apikey", key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AuthError::Unauthorized(resp.status().to_string()));
            }
            s if !s.is_success() => {
                return Err(AuthError::Network(format!("unexpected status {}", s)));
            }
            _ => {}
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        serde_json::from_str::<User>(&body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}
