use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::auth::provider::{AuthError, AuthProvider};
use crate::models::User;

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub established_at: DateTime<Utc>,
}

type Slot = Option<Arc<Session>>;

/// Owner of the signed-in session. Screens only ever get a [`SessionReader`].
#[derive(Clone)]
pub struct SessionContext {
    slot: Arc<watch::Sender<Slot>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the token's user and installs a fresh session.
    /// A failed login leaves whatever session was active in place.
    pub async fn login(
        &self,
        provider: &dyn AuthProvider,
        access_token: &str,
    ) -> Result<User, AuthError> {
        let user = provider.get_current_user(access_token).await.map_err(|e| {
            error!("login: unable to resolve current user: {}", e);
            e
        })?;
        let session = Session {
            user: user.clone(),
            access_token: access_token.to_string(),
            established_at: Utc::now(),
        };
        self.slot.send_replace(Some(Arc::new(session)));
        info!("login: session established for user {}", user.id);
        Ok(user)
    }

    /// Drops the active session. Returns false when nobody was signed in.
    pub fn logout(&self) -> bool {
        let previous = self.slot.send_replace(None);
        if let Some(session) = &previous {
            info!("logout: session closed for user {}", session.user.id);
        }
        previous.is_some()
    }

    pub fn reader(&self) -> SessionReader {
        SessionReader {
            slot: self.slot.subscribe(),
        }
    }
}

/// Read-only view of the session; always reflects the latest login or logout.
#[derive(Clone)]
pub struct SessionReader {
    slot: watch::Receiver<Slot>,
}

impl SessionReader {
    pub fn current(&self) -> Option<Arc<Session>> {
        self.slot.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.current().map(|s| s.user.clone())
    }
}
