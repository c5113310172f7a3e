use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::models::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "params")]
pub enum NavigationEvent {
    Stall {
        #[serde(rename = "id")]
        stall_id: i32,
        coordinate: Coordinate,
        #[serde(rename = "isQueuing")]
        is_queuing: bool,
    },
    TransactionDetail {
        transaction_id: i64,
    },
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, event: NavigationEvent);
}

impl Navigator for UnboundedSender<NavigationEvent> {
    fn navigate(&self, event: NavigationEvent) {
        if let Err(e) = self.send(event) {
            warn!("navigate: receiver dropped, discarding {:?}", e.0);
        }
    }
}
