pub mod canteen;
pub mod navigation;
pub mod notify;
pub mod transactions;

use std::sync::atomic::{AtomicU64, Ordering};

pub use canteen::{CanteenRoute, CanteenScreen, CanteenView};
pub use navigation::{NavigationEvent, Navigator};
pub use notify::{LogNotifier, Notification, Notifier};
pub use transactions::{TransactionsScreen, TransactionsView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load started while this one was in flight; its result was dropped.
    Superseded,
}

/// Per-screen counter of issued loads. Only the latest generation may write view state.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_generation_supersedes_earlier() {
        let gens = RequestGeneration::new();
        let first = gens.begin();
        assert!(gens.is_current(first));
        let second = gens.begin();
        assert!(!gens.is_current(first));
        assert!(gens.is_current(second));
    }
}
