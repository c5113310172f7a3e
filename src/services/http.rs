use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::enums::ApiResponse;
use crate::models::{Canteen, Stall, Transaction};
use crate::services::{CanteenService, ServiceError, StallService, TransactionSource};

#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("get_data: request to {} failed: {}", url, e);
                ServiceError::Network(e.to_string())
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            error!("get_data: {} answered {}", url, status);
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            error!("get_data: malformed body from {}: {}", url, e);
            ServiceError::Decode(e.to_string())
        })?;

        if !envelope.is_ok() {
            return Err(ServiceError::Backend(
                envelope
                    .error
                    .unwrap_or_else(|| format!("status '{}'", envelope.status)),
            ));
        }
        envelope
            .data
            .ok_or_else(|| ServiceError::MissingData(path.to_string()))
    }
}

#[async_trait]
impl CanteenService for BackendClient {
    async fn get_canteen_by_id(&self, marker_id: i32) -> Result<Canteen, ServiceError> {
        let canteen: Canteen = self
            .get_data(&format!("/canteens/{}", marker_id), &[])
            .await?;
        debug!(
            "get_canteen_by_id: marker {} resolved to canteen {}",
            marker_id, canteen.canteen_id
        );
        Ok(canteen)
    }
}

#[async_trait]
impl StallService for BackendClient {
    async fn get_stalls_by_id(&self, ids: &[i32]) -> Result<Vec<Stall>, ServiceError> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let stalls: Vec<Stall> = self.get_data("/stalls", &[("ids", joined)]).await?;
        debug!(
            "get_stalls_by_id: fetched {} stalls for {} ids",
            stalls.len(),
            ids.len()
        );
        Ok(stalls)
    }
}

#[async_trait]
impl TransactionSource for BackendClient {
    async fn get_transactions(&self) -> Result<Vec<Transaction>, ServiceError> {
        self.get_data("/transactions", &[]).await
    }
}
