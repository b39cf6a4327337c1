//! Posting transactions and keeping the category indices in step

use chrono::NaiveDate;
use tracing::debug;

use super::Budget;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, CategoryId, Money, Transaction, TransactionId, YearMonth};

impl Budget {
    /// Record a transaction in `account_id`
    ///
    /// Exactly one of `category_id` and `counterparty` must be given. With a
    /// category the transaction is an income or expense; with a counterparty
    /// it is a transfer and a mirror transaction carrying the negated amount
    /// is appended to the counterparty's ledger. Returns the id of the
    /// transaction posted to `account_id`.
    pub fn add_transaction(
        &mut self,
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category_id: Option<CategoryId>,
        counterparty: Option<AccountId>,
    ) -> LedgerResult<TransactionId> {
        match (category_id, counterparty) {
            (None, None) => Err(LedgerError::MustHaveCategory),
            (Some(_), Some(_)) => Err(LedgerError::CannotAssignCategoryToTransfer),
            (Some(category_id), None) => {
                self.require_account(account_id)?;
                self.require_category(category_id)?;
                Ok(self.post_income_expense(account_id, date, amount, description, category_id))
            }
            (None, Some(counterparty)) => {
                self.require_account(account_id)?;
                self.require_account(counterparty)?;
                if counterparty == account_id {
                    return Err(LedgerError::Validation(
                        "Cannot transfer to the same account".into(),
                    ));
                }
                Ok(self.post_transfer(account_id, counterparty, date, amount, description))
            }
        }
    }

    /// Change the category of a posted transaction
    ///
    /// Transfers only accept `None`. Setting the category a transaction
    /// already has is a no-op.
    pub fn set_transaction_category(
        &mut self,
        transaction_id: TransactionId,
        category_id: Option<CategoryId>,
    ) -> LedgerResult<()> {
        let txn = self
            .transactions
            .get(&transaction_id)
            .ok_or_else(|| LedgerError::transaction_not_found(transaction_id.to_string()))?;

        if txn.is_transfer() && category_id.is_some() {
            return Err(LedgerError::CannotAssignCategoryToTransfer);
        }
        if let Some(category_id) = category_id {
            self.require_category(category_id)?;
        }

        let previous = txn.category_id;
        let month = txn.month();
        if previous == category_id {
            return Ok(());
        }

        if let Some(previous) = previous {
            self.unindex(transaction_id, previous, month);
        }
        if let Some(category_id) = category_id {
            self.index(transaction_id, category_id, month);
        }

        // Buckets are updated before the stored category changes
        if let Some(txn) = self.transactions.get_mut(&transaction_id) {
            txn.category_id = category_id;
        }

        debug!(
            transaction = %transaction_id,
            from = ?previous,
            to = ?category_id,
            "recategorized transaction"
        );
        Ok(())
    }

    /// Post a categorized transaction; the caller has validated both ids
    pub(super) fn post_income_expense(
        &mut self,
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category_id: CategoryId,
    ) -> TransactionId {
        let txn = Transaction::income_expense(account_id, date, amount, description, category_id);
        let id = txn.id;
        let month = txn.month();

        self.store(txn);
        self.widen_months(month);
        self.index(id, category_id, month);

        debug!(
            transaction = %id,
            account = %account_id,
            category = %category_id,
            %amount,
            %month,
            "posted transaction"
        );
        id
    }

    fn post_transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
    ) -> TransactionId {
        let (outgoing, incoming) = Transaction::transfer_pair(from, to, date, amount, description);
        let id = outgoing.id;
        let month = outgoing.month();

        self.store(outgoing);
        self.store(incoming);
        self.widen_months(month);

        debug!(
            transaction = %id,
            from = %from,
            to = %to,
            %amount,
            %month,
            "posted transfer"
        );
        id
    }

    fn store(&mut self, txn: Transaction) {
        if let Some(account) = self.accounts.get_mut(&txn.account_id) {
            account.push_transaction(txn.date, txn.id);
        }
        self.transactions.insert(txn.id, txn);
    }

    fn index(&mut self, transaction_id: TransactionId, category_id: CategoryId, month: YearMonth) {
        self.transactions_by_category
            .entry(category_id)
            .or_default()
            .push(transaction_id);

        if category_id == self.tbb {
            self.tbb_transactions
                .entry(month)
                .or_default()
                .push(transaction_id);
        }
    }

    fn unindex(&mut self, transaction_id: TransactionId, category_id: CategoryId, month: YearMonth) {
        if let Some(bucket) = self.transactions_by_category.get_mut(&category_id) {
            bucket.retain(|id| *id != transaction_id);
            if bucket.is_empty() {
                self.transactions_by_category.remove(&category_id);
            }
        }

        if category_id == self.tbb {
            if let Some(bucket) = self.tbb_transactions.get_mut(&month) {
                bucket.retain(|id| *id != transaction_id);
                if bucket.is_empty() {
                    self.tbb_transactions.remove(&month);
                }
            }
        }
    }
}
