mod errors;
pub mod fixture;
pub mod http;

use crate::models::{Canteen, Stall, Transaction};
use async_trait::async_trait;

pub use errors::ServiceError;
pub use fixture::{FixtureTransactions, StaticTransactions};
pub use http::BackendClient;

#[async_trait]
pub trait CanteenService: Send + Sync {
    async fn get_canteen_by_id(&self, marker_id: i32) -> Result<Canteen, ServiceError>;
}

#[async_trait]
pub trait StallService: Send + Sync {
    /// Stalls in the order the backend returns them.
    async fn get_stalls_by_id(&self, ids: &[i32]) -> Result<Vec<Stall>, ServiceError>;
}

#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn get_transactions(&self) -> Result<Vec<Transaction>, ServiceError>;
}
