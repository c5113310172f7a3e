use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub completed: bool,
    // Remaining status flags are carried through untouched.
    #[serde(flatten)]
    pub flags: Map<String, Value>,
}

impl TransactionStatus {
    pub fn new(completed: bool) -> Self {
        Self {
            completed,
            flags: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub buyer_id: String,
    pub queuer_id: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn involves(&self, user_id: &str) -> bool {
        self.buyer_id == user_id || self.queuer_id == user_id
    }
}
