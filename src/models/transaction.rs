//! Transaction model
//!
//! A transaction is one movement of money in one account. It is either an
//! income/expense carrying a category, or one leg of a transfer carrying the
//! counterparty account. Everything except the category is fixed once the
//! transaction is posted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;
use super::month::YearMonth;

/// Classification of a transaction, derived from its counterparty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    IncomeExpense,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncomeExpense => write!(f, "Income/Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A posted transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// Category, for income/expense only
    pub(crate) category_id: Option<CategoryId>,

    /// For a transfer, the account on the other side
    pub transfer_account_id: Option<AccountId>,

    /// For a transfer, the mirror transaction in the counterparty account
    pub transfer_transaction_id: Option<TransactionId>,
}

impl Transaction {
    pub(crate) fn income_expense(
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            date,
            amount,
            description: description.into(),
            category_id: Some(category_id),
            transfer_account_id: None,
            transfer_transaction_id: None,
        }
    }

    /// Build both legs of a transfer; the second leg carries the negated amount
    pub(crate) fn transfer_pair(
        from: AccountId,
        to: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
    ) -> (Self, Self) {
        let description = description.into();
        let mut outgoing = Self {
            id: TransactionId::new(),
            account_id: from,
            date,
            amount,
            description: description.clone(),
            category_id: None,
            transfer_account_id: Some(to),
            transfer_transaction_id: None,
        };
        let mut incoming = Self {
            id: TransactionId::new(),
            account_id: to,
            date,
            amount: -amount,
            description,
            category_id: None,
            transfer_account_id: Some(from),
            transfer_transaction_id: None,
        };

        outgoing.transfer_transaction_id = Some(incoming.id);
        incoming.transfer_transaction_id = Some(outgoing.id);

        (outgoing, incoming)
    }

    /// The category this transaction is assigned to, if any
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Derived classification; a transfer is any transaction with a counterparty
    pub fn kind(&self) -> TransactionKind {
        if self.transfer_account_id.is_some() {
            TransactionKind::Transfer
        } else {
            TransactionKind::IncomeExpense
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.kind() == TransactionKind::Transfer
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an outflow (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }

    /// The month this transaction is booked in
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
