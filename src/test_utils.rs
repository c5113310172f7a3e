use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::{AuthError, AuthProvider};
use crate::models::{Canteen, Coordinate, Marker, Stall, Transaction, TransactionStatus, User};
use crate::screens::{NavigationEvent, Navigator, Notification, Notifier};
use crate::services::{CanteenService, ServiceError, StallService};

// Fixture strategy:
// - Canteen ids equal the marker ids that resolve to them.
// - Stall ids are unique across canteens; images stay None.

pub fn sample_marker(marker_id: i32) -> Marker {
    Marker {
        marker_id,
        coordinate: Coordinate {
            latitude: 1.3483,
            longitude: 103.6831,
        },
    }
}

pub fn sample_canteen(canteen_id: i32, stall_ids: Option<Vec<i32>>) -> Canteen {
    Canteen {
        canteen_id,
        canteen_name: format!("Canteen {}", canteen_id),
        canteen_image: None,
        canteen_stalls_ids: stall_ids,
    }
}

pub fn sample_stall(stall_id: i32) -> Stall {
    Stall {
        stall_id,
        stall_name: format!("Stall {}", stall_id),
        cuisine: "Chinese".to_string(),
        stall_image: None,
    }
}

pub fn sample_transaction(
    id: i64,
    buyer_id: &str,
    queuer_id: &str,
    completed: bool,
) -> Transaction {
    Transaction {
        id,
        buyer_id: buyer_id.to_string(),
        queuer_id: queuer_id.to_string(),
        status: TransactionStatus::new(completed),
    }
}

/// In-memory canteen and stall backend that counts the calls it receives.
#[derive(Default)]
pub struct FakeBackend {
    canteens: HashMap<i32, Canteen>,
    stalls: HashMap<i32, Stall>,
    fail_canteens: bool,
    fail_stalls: bool,
    canteen_calls: AtomicUsize,
    stall_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canteen(mut self, canteen: Canteen) -> Self {
        self.canteens.insert(canteen.canteen_id, canteen);
        self
    }

    pub fn with_stalls(mut self, stalls: impl IntoIterator<Item = Stall>) -> Self {
        for stall in stalls {
            self.stalls.insert(stall.stall_id, stall);
        }
        self
    }

    pub fn failing_canteens(mut self) -> Self {
        self.fail_canteens = true;
        self
    }

    pub fn failing_stalls(mut self) -> Self {
        self.fail_stalls = true;
        self
    }

    pub fn canteen_calls(&self) -> usize {
        self.canteen_calls.load(Ordering::SeqCst)
    }

    pub fn stall_calls(&self) -> usize {
        self.stall_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CanteenService for FakeBackend {
    async fn get_canteen_by_id(&self, marker_id: i32) -> Result<Canteen, ServiceError> {
        self.canteen_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_canteens {
            return Err(ServiceError::Network("connection refused".to_string()));
        }
        self.canteens
            .get(&marker_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("/canteens/{}", marker_id)))
    }
}

#[async_trait]
impl StallService for FakeBackend {
    async fn get_stalls_by_id(&self, ids: &[i32]) -> Result<Vec<Stall>, ServiceError> {
        self.stall_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_stalls {
            return Err(ServiceError::Status(500));
        }
        Ok(ids.iter().filter_map(|id| self.stalls.get(id).cloned()).collect())
    }
}

/// Token -> user table standing in for the auth service.
#[derive(Default)]
pub struct StaticAuth {
    users: HashMap<String, User>,
}

impl StaticAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: &str, user: User) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn get_current_user(&self, access_token: &str) -> Result<User, AuthError> {
        self.users
            .get(access_token)
            .cloned()
            .ok_or_else(|| AuthError::Unauthorized("unknown token".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    seen: Mutex<Vec<NavigationEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, event: NavigationEvent) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(event);
        }
    }
}
