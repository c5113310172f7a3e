use crate::enums::ViewMode;
use crate::models::{Transaction, User};

/// Ongoing and past transactions of one user, each in input order.
#[derive(Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub ongoing: Vec<&'a Transaction>,
    pub past: Vec<&'a Transaction>,
}

impl<'a> Partition<'a> {
    pub fn get(&self, mode: ViewMode) -> &[&'a Transaction] {
        match mode {
            ViewMode::Ongoing => &self.ongoing,
            ViewMode::Past => &self.past,
        }
    }

    pub fn len(&self) -> usize {
        self.ongoing.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn is_relevant(transaction: &Transaction, user: &User) -> bool {
    transaction.involves(&user.id)
}

/// Transactions of `user` that belong to `mode`, in input order.
///
/// A `None` user means the session has not resolved yet and yields nothing.
pub fn classify<'a>(
    transactions: &'a [Transaction],
    user: Option<&User>,
    mode: ViewMode,
) -> Vec<&'a Transaction> {
    let Some(user) = user else {
        return Vec::new();
    };
    transactions
        .iter()
        .filter(|t| is_relevant(t, user) && t.status.completed == mode.wants_completed())
        .collect()
}

/// Splits the user's relevant transactions on `status.completed` in one pass.
pub fn partition<'a>(transactions: &'a [Transaction], user: Option<&User>) -> Partition<'a> {
    let mut out = Partition::default();
    let Some(user) = user else {
        return out;
    };
    for t in transactions.iter().filter(|t| is_relevant(t, user)) {
        if t.status.completed {
            out.past.push(t);
        } else {
            out.ongoing.push(t);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionStatus;

    fn tx(id: i64, buyer: &str, queuer: &str, completed: bool) -> Transaction {
        Transaction {
            id,
            buyer_id: buyer.to_string(),
            queuer_id: queuer.to_string(),
            status: TransactionStatus::new(completed),
        }
    }

    #[test]
    fn partition_agrees_with_classify() {
        let all = vec![
            tx(1, "a", "b", false),
            tx(2, "c", "a", true),
            tx(3, "c", "d", false),
            tx(4, "a", "a", true),
        ];
        let user = User::new("a");
        let p = partition(&all, Some(&user));
        for mode in ViewMode::ALL {
            assert_eq!(p.get(mode), classify(&all, Some(&user), mode).as_slice());
        }
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn partition_without_user_is_empty() {
        let all = vec![tx(1, "a", "b", false)];
        assert!(partition(&all, None).is_empty());
    }
}
