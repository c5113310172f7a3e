#[macro_use]
extern crate log;

pub mod auth;
pub mod classify;
pub mod config;
pub mod enums;
pub mod models;
pub mod screens;
pub mod services;
pub mod test_utils;

use std::sync::Arc;

use crate::auth::{AuthError, AuthProvider, HttpAuthProvider, SessionContext};
use crate::config::{ClientConfig, ConfigError};
use crate::screens::{CanteenScreen, Navigator, Notifier, TransactionsScreen};
use crate::services::{BackendClient, FixtureTransactions, ServiceError, TransactionSource};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client error: {0}")]
    Service(#[from] ServiceError),
    #[error("auth client error: {0}")]
    Auth(#[from] AuthError),
}

/// Collaborators shared by every screen of one signed-in client.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub auth: Arc<dyn AuthProvider>,
    pub session: SessionContext,
    pub transactions: Arc<dyn TransactionSource>,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> Result<Self, StartupError> {
        let backend = BackendClient::new(config.backend_url.as_str(), config.request_timeout)?;
        let auth = HttpAuthProvider::new(
            &config.auth_url,
            config.auth_api_key.clone(),
            config.request_timeout,
        )?;

        let transactions: Arc<dyn TransactionSource> = match &config.transactions_fixture {
            Some(path) => {
                info!("Reading transactions from fixture {}", path.display());
                Arc::new(FixtureTransactions::new(path.clone()))
            }
            None => Arc::new(backend.clone()),
        };

        Ok(AppState {
            backend,
            auth: Arc::new(auth),
            session: SessionContext::new(),
            transactions,
        })
    }

    pub fn canteen_screen(
        &self,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> CanteenScreen {
        let backend = Arc::new(self.backend.clone());
        CanteenScreen::new(backend.clone(), backend, notifier, navigator)
    }

    pub fn transactions_screen(
        &self,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> TransactionsScreen {
        TransactionsScreen::new(
            self.transactions.clone(),
            self.session.reader(),
            notifier,
            navigator,
        )
    }
}
