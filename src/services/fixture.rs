use std::path::PathBuf;

use async_trait::async_trait;

use crate::models::Transaction;
use crate::services::{ServiceError, TransactionSource};

/// Reads transactions from a JSON array on disk, re-reading the file on every fetch.
#[derive(Clone, Debug)]
pub struct FixtureTransactions {
    path: PathBuf,
}

impl FixtureTransactions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransactionSource for FixtureTransactions {
    async fn get_transactions(&self) -> Result<Vec<Transaction>, ServiceError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!(
                "get_transactions: unable to read fixture {}: {}",
                self.path.display(),
                e
            );
            ServiceError::Io(e)
        })?;
        let transactions: Vec<Transaction> =
            serde_json::from_str(&raw).map_err(|e| ServiceError::Decode(e.to_string()))?;
        debug!(
            "get_transactions: loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }
}

/// In-memory collection, handy when the transactions are already at hand.
#[derive(Clone, Debug, Default)]
pub struct StaticTransactions {
    transactions: Vec<Transaction>,
}

impl StaticTransactions {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for StaticTransactions {
    async fn get_transactions(&self) -> Result<Vec<Transaction>, ServiceError> {
        Ok(self.transactions.clone())
    }
}
