use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::SessionReader;
use crate::classify::{classify, partition};
use crate::enums::ViewMode;
use crate::models::{Transaction, User};
use crate::screens::{
    LoadOutcome, NavigationEvent, Navigator, Notification, Notifier, RequestGeneration,
};
use crate::services::TransactionSource;

const TRANSACTION_FETCH_FAILED: &str = "Unable to fetch transactions.";

#[derive(Debug, Default)]
struct TransactionsState {
    mode: ViewMode,
    user: Option<User>,
    transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsView {
    pub mode: ViewMode,
    pub user: Option<User>,
    pub ongoing_count: usize,
    pub past_count: usize,
    pub transactions: Vec<Transaction>,
}

pub struct TransactionsScreen {
    source: Arc<dyn TransactionSource>,
    session: SessionReader,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    generation: RequestGeneration,
    state: Mutex<TransactionsState>,
}

impl TransactionsScreen {
    pub fn new(
        source: Arc<dyn TransactionSource>,
        session: SessionReader,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            source,
            session,
            notifier,
            navigator,
            generation: RequestGeneration::new(),
            state: Mutex::new(TransactionsState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, TransactionsState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Locks the state after dropping rows that belong to a user who is no
    /// longer signed in. Rows come back with the next `refresh`.
    fn lock_current(&self) -> MutexGuard<'_, TransactionsState> {
        let live = self.session.user();
        let mut state = self.lock_state();
        let same_user = match (&state.user, &live) {
            (Some(held), Some(live)) => held.id == live.id,
            (None, None) => true,
            _ => false,
        };
        if !same_user {
            debug!(
                "transactions_screen: session changed from {:?} to {:?}, clearing {} rows",
                state.user.as_ref().map(|u| u.id.as_str()),
                live.as_ref().map(|u| u.id.as_str()),
                state.transactions.len()
            );
            state.transactions.clear();
            state.user = live;
        }
        state
    }

    /// Re-reads the session user and the transaction collection.
    ///
    /// Without a signed-in user nothing is fetched and the list stays empty.
    pub async fn refresh(&self) -> LoadOutcome {
        let generation = self.generation.begin();
        let user = self.session.user();
        let mut failed = false;

        let transactions = match &user {
            None => {
                debug!("refresh_transactions: no session yet, nothing to show");
                Vec::new()
            }
            Some(user) => match self.source.get_transactions().await {
                Ok(transactions) => {
                    debug!(
                        "refresh_transactions: fetched {} transactions for user {}",
                        transactions.len(),
                        user.id
                    );
                    transactions
                }
                Err(e) => {
                    error!("refresh_transactions: unable to fetch transactions: {}", e);
                    failed = true;
                    Vec::new()
                }
            },
        };

        {
            let mut state = self.lock_state();
            if !self.generation.is_current(generation) {
                debug!(
                    "refresh_transactions: dropping stale response (generation {})",
                    generation
                );
                return LoadOutcome::Superseded;
            }
            state.user = user;
            state.transactions = transactions;
        }

        if failed {
            self.notifier
                .notify(Notification::error(TRANSACTION_FETCH_FAILED));
        }
        LoadOutcome::Applied
    }

    pub fn mode(&self) -> ViewMode {
        self.lock_state().mode
    }

    pub fn set_mode(&self, mode: ViewMode) {
        self.lock_state().mode = mode;
    }

    /// Transactions of the active mode, in source order.
    pub fn visible(&self) -> Vec<Transaction> {
        let state = self.lock_current();
        classify(&state.transactions, state.user.as_ref(), state.mode)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn view(&self) -> TransactionsView {
        let state = self.lock_current();
        let split = partition(&state.transactions, state.user.as_ref());
        TransactionsView {
            mode: state.mode,
            user: state.user.clone(),
            ongoing_count: split.ongoing.len(),
            past_count: split.past.len(),
            transactions: split.get(state.mode).iter().map(|t| (*t).clone()).collect(),
        }
    }

    /// Opens the detail screen for a transaction in the active list.
    pub fn select_transaction(&self, transaction_id: i64) -> bool {
        let listed = self.visible().iter().any(|t| t.id == transaction_id);
        if !listed {
            warn!(
                "select_transaction: transaction {} is not listed",
                transaction_id
            );
            return false;
        }
        self.navigator
            .navigate(NavigationEvent::TransactionDetail { transaction_id });
        true
    }
}
