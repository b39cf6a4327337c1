//! Account model
//!
//! An account is a named money-holding entity. It owns an ordered list of
//! transaction ids; the transactions themselves live in the budget's arena,
//! so the balance is computed through `AccountRef::balance`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Savings")
    pub name: String,

    /// Ledger entries, ordered by date and then by insertion
    transactions: Vec<(NaiveDate, TransactionId)>,
}

impl Account {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Insert a transaction after every entry dated on or before `date`
    pub(crate) fn push_transaction(&mut self, date: NaiveDate, id: TransactionId) {
        let at = self.transactions.partition_point(|(d, _)| *d <= date);
        self.transactions.insert(at, (date, id));
    }

    /// Transaction ids in ledger order
    pub fn transaction_ids(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.transactions.iter().map(|(_, id)| *id)
    }

    /// Number of transactions in this account
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = Account::new("Savings");
        assert_eq!(account.name, "Savings");
        assert!(account.is_empty());
    }

    #[test]
    fn test_ledger_order_is_date_then_insertion() {
        let mut account = Account::new("Checking");
        let late = TransactionId::new();
        let early = TransactionId::new();
        let same_day_first = TransactionId::new();
        let same_day_second = TransactionId::new();

        account.push_transaction(date(2018, 3, 1), late);
        account.push_transaction(date(2018, 1, 1), early);
        account.push_transaction(date(2018, 2, 1), same_day_first);
        account.push_transaction(date(2018, 2, 1), same_day_second);

        let order: Vec<_> = account.transaction_ids().collect();
        assert_eq!(order, vec![early, same_day_first, same_day_second, late]);
        assert_eq!(account.len(), 4);
    }
}
