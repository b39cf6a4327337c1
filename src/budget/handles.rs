//! Borrowed views onto entities owned by a [`Budget`]
//!
//! A handle pairs a budget borrow with one entity, so category and account
//! queries read naturally (`food.available(jan)`) while the budget stays the
//! only owner of the graph.

use chrono::NaiveDate;

use super::Budget;
use crate::error::LedgerResult;
use crate::models::{
    Account, AccountId, Category, CategoryId, CategoryKind, Money, Transaction, TransactionId,
    YearMonth,
};

/// Read-only view of a category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRef<'a> {
    budget: &'a Budget,
    category: &'a Category,
}

impl<'a> CategoryRef<'a> {
    pub(super) fn new(budget: &'a Budget, category: &'a Category) -> Self {
        Self { budget, category }
    }

    pub fn id(&self) -> CategoryId {
        self.category.id
    }

    pub fn name(&self) -> &'a str {
        &self.category.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.category.kind
    }

    pub fn is_tbb(&self) -> bool {
        self.category.is_tbb()
    }

    /// The underlying model
    pub fn category(&self) -> &'a Category {
        self.category
    }

    pub fn budgeted(&self, month: YearMonth) -> Money {
        self.budget.budgeted(month, self.category.id)
    }

    pub fn activities(&self, month: YearMonth) -> Money {
        self.budget.activities(month, self.category.id)
    }

    pub fn available(&self, month: YearMonth) -> Money {
        self.budget.available(month, self.category.id)
    }
}

/// Read-only view of an account and its ledger
#[derive(Debug, Clone, Copy)]
pub struct AccountRef<'a> {
    budget: &'a Budget,
    account: &'a Account,
}

impl<'a> AccountRef<'a> {
    pub(super) fn new(budget: &'a Budget, account: &'a Account) -> Self {
        Self { budget, account }
    }

    pub fn id(&self) -> AccountId {
        self.account.id
    }

    pub fn name(&self) -> &'a str {
        &self.account.name
    }

    /// The underlying model
    pub fn account(&self) -> &'a Account {
        self.account
    }

    /// Transactions ordered by date; same-day entries keep posting order
    pub fn transactions(&self) -> impl Iterator<Item = &'a Transaction> + 'a {
        let budget = self.budget;
        let account = self.account;
        account
            .transaction_ids()
            .filter_map(move |id| budget.transactions.get(&id))
    }

    /// Sum of every transaction in the account
    pub fn balance(&self) -> Money {
        self.transactions().map(|txn| txn.amount).sum()
    }
}

/// Mutable handle used to post transactions to one account
#[derive(Debug)]
pub struct AccountMut<'a> {
    budget: &'a mut Budget,
    id: AccountId,
}

impl<'a> AccountMut<'a> {
    pub(super) fn new(budget: &'a mut Budget, id: AccountId) -> Self {
        Self { budget, id }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// See [`Budget::add_transaction`]
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category_id: Option<CategoryId>,
        counterparty: Option<AccountId>,
    ) -> LedgerResult<TransactionId> {
        self.budget
            .add_transaction(self.id, date, amount, description, category_id, counterparty)
    }

    pub fn balance(&self) -> Money {
        self.budget
            .account(self.id)
            .map(|account| account.balance())
            .unwrap_or(Money::ZERO)
    }
}

/// Mutable handle for re-categorizing one transaction
#[derive(Debug)]
pub struct TransactionMut<'a> {
    budget: &'a mut Budget,
    id: TransactionId,
}

impl<'a> TransactionMut<'a> {
    pub(super) fn new(budget: &'a mut Budget, id: TransactionId) -> Self {
        Self { budget, id }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.budget
            .transaction(self.id)
            .and_then(|txn| txn.category_id())
    }

    /// See [`Budget::set_transaction_category`]
    pub fn set_category(&mut self, category_id: Option<CategoryId>) -> LedgerResult<()> {
        self.budget.set_transaction_category(self.id, category_id)
    }
}
