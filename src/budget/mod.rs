//! The budget aggregate
//!
//! `Budget` owns every account, category and transaction in one ledger,
//! the per-month budgeted table and the indices used by the month queries.
//! Transactions live in a single arena keyed by id; accounts and the
//! category indices refer to them by id only, so re-categorizing a
//! transaction moves an id between buckets and never invalidates a
//! reference.
//!
//! Callers reach individual entities through borrowed handles
//! ([`CategoryRef`], [`AccountRef`], [`AccountMut`], [`TransactionMut`]).
//! All mutation is synchronous and assumes a single writer; embedders that
//! share a `Budget` across threads must wrap the whole aggregate in one lock.

mod allocation;
mod handles;
mod ledger;
mod overview;
mod tbb;

pub use handles::{AccountMut, AccountRef, CategoryRef, TransactionMut};
pub use overview::{BudgetOverview, CategoryBudgetSummary};

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, Category, CategoryId, CategoryKind, Money, Transaction, TransactionId,
    YearMonth,
};

/// Inclusive bounds of every month holding a transaction or a budgeted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub earliest: YearMonth,
    pub latest: YearMonth,
}

impl MonthRange {
    fn single(month: YearMonth) -> Self {
        Self {
            earliest: month,
            latest: month,
        }
    }

    fn widen(&mut self, month: YearMonth) {
        if month < self.earliest {
            self.earliest = month;
        }
        if month > self.latest {
            self.latest = month;
        }
    }
}

/// An envelope budget: accounts, categories, budgeted amounts and the
/// transaction ledger behind them
#[derive(Debug, Clone)]
pub struct Budget {
    name: String,
    settings: Settings,
    tbb: CategoryId,

    categories: HashMap<CategoryId, Category>,
    category_order: Vec<CategoryId>,
    accounts: HashMap<AccountId, Account>,
    account_order: Vec<AccountId>,
    transactions: HashMap<TransactionId, Transaction>,

    /// budgeted[month][category]; an absent entry reads as zero
    budgeted: BTreeMap<YearMonth, HashMap<CategoryId, Money>>,
    transactions_by_category: HashMap<CategoryId, Vec<TransactionId>>,
    tbb_transactions: BTreeMap<YearMonth, Vec<TransactionId>>,

    /// Widened on every mutation, never narrowed; `None` until the first one
    months: Option<MonthRange>,
}

impl Budget {
    /// Create an empty budget with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, Settings::default())
    }

    /// Create an empty budget; the To Be Budgeted category is named from `settings`
    pub fn with_settings(name: impl Into<String>, settings: Settings) -> Self {
        let tbb = Category::new(settings.tbb_category_name.clone(), CategoryKind::ToBeBudgeted);
        let tbb_id = tbb.id;

        let mut budget = Self {
            name: name.into(),
            settings,
            tbb: tbb_id,
            categories: HashMap::new(),
            category_order: Vec::new(),
            accounts: HashMap::new(),
            account_order: Vec::new(),
            transactions: HashMap::new(),
            budgeted: BTreeMap::new(),
            transactions_by_category: HashMap::new(),
            tbb_transactions: BTreeMap::new(),
            months: None,
        };
        budget.insert_category(tbb);
        debug!(budget = %budget.name, tbb = %tbb_id, "created budget");
        budget
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The distinguished To Be Budgeted category
    pub fn tbb_category(&self) -> CategoryId {
        self.tbb
    }

    /// Earliest month with recorded activity, if any
    pub fn earliest_month(&self) -> Option<YearMonth> {
        self.months.map(|r| r.earliest)
    }

    /// Latest month with recorded activity, if any
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.months.map(|r| r.latest)
    }

    pub fn month_range(&self) -> Option<MonthRange> {
        self.months
    }

    /// Create and register a new spending category
    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        let category = Category::new(name, CategoryKind::Envelope);
        let id = category.id;
        debug!(category = %id, name = %category.name, "added category");
        self.insert_category(category);
        id
    }

    /// Rename a category; its identity is unchanged
    pub fn rename_category(
        &mut self,
        category_id: CategoryId,
        name: impl Into<String>,
    ) -> LedgerResult<()> {
        let category = self
            .categories
            .get_mut(&category_id)
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;
        category.name = name.into();
        Ok(())
    }

    /// Open an account; the opening balance enters the budget as unassigned money
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        opening_balance: Money,
        date: NaiveDate,
    ) -> AccountId {
        let account = Account::new(name);
        let id = account.id;
        debug!(account = %id, name = %account.name, %opening_balance, %date, "added account");

        self.accounts.insert(id, account);
        self.account_order.push(id);
        self.post_income_expense(id, date, opening_balance, "Starting Balance", self.tbb);
        id
    }

    pub fn category(&self, category_id: CategoryId) -> Option<CategoryRef<'_>> {
        self.categories
            .get(&category_id)
            .map(|category| CategoryRef::new(self, category))
    }

    /// All categories in creation order, To Be Budgeted first
    pub fn categories(&self) -> impl Iterator<Item = CategoryRef<'_>> + '_ {
        self.category_order
            .iter()
            .filter_map(move |id| self.category(*id))
    }

    /// First category with the given name, in creation order
    pub fn find_category(&self, name: &str) -> Option<CategoryRef<'_>> {
        self.categories().find(|c| c.name() == name)
    }

    pub fn account(&self, account_id: AccountId) -> Option<AccountRef<'_>> {
        self.accounts
            .get(&account_id)
            .map(|account| AccountRef::new(self, account))
    }

    pub fn account_mut(&mut self, account_id: AccountId) -> Option<AccountMut<'_>> {
        if self.accounts.contains_key(&account_id) {
            Some(AccountMut::new(self, account_id))
        } else {
            None
        }
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> impl Iterator<Item = AccountRef<'_>> + '_ {
        self.account_order
            .iter()
            .filter_map(move |id| self.account(*id))
    }

    pub fn transaction(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&transaction_id)
    }

    pub fn transaction_mut(&mut self, transaction_id: TransactionId) -> Option<TransactionMut<'_>> {
        if self.transactions.contains_key(&transaction_id) {
            Some(TransactionMut::new(self, transaction_id))
        } else {
            None
        }
    }

    /// The mirror leg of a transfer
    pub fn linked_transaction(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transaction(transaction_id)?
            .transfer_transaction_id
            .and_then(|linked| self.transaction(linked))
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    fn insert_category(&mut self, category: Category) {
        self.category_order.push(category.id);
        self.categories.insert(category.id, category);
    }

    fn require_category(&self, category_id: CategoryId) -> LedgerResult<&Category> {
        self.categories
            .get(&category_id)
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))
    }

    fn require_account(&self, account_id: AccountId) -> LedgerResult<&Account> {
        self.accounts
            .get(&account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.to_string()))
    }

    fn widen_months(&mut self, month: YearMonth) {
        match self.months.as_mut() {
            Some(range) => range.widen(month),
            None => self.months = Some(MonthRange::single(month)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_new_budget_has_tbb_category() {
        let budget = Budget::new("My Budget");
        assert_eq!(budget.name(), "My Budget");

        let tbb = budget.category(budget.tbb_category()).unwrap();
        assert!(tbb.is_tbb());
        assert_eq!(tbb.name(), "To Be Budgeted");
        assert_eq!(budget.categories().count(), 1);
        assert_eq!(budget.earliest_month(), None);
        assert_eq!(budget.latest_month(), None);
    }

    #[test]
    fn test_settings_name_the_tbb_category() {
        let mut settings = Settings::default();
        settings.tbb_category_name = "Ready to Assign".into();
        settings.currency_symbol = "€".into();
        let budget = Budget::with_settings("Euro", settings);

        assert_eq!(
            budget.category(budget.tbb_category()).unwrap().name(),
            "Ready to Assign"
        );
        assert_eq!(budget.format_amount(Money::from(dec!(-4.20))), "-€4.20");
    }

    #[test]
    fn test_add_account_posts_opening_balance_to_tbb() {
        let mut budget = Budget::new("My Budget");
        let savings = budget.add_account("Savings", Money::from(dec!(100.00)), date(2018, 1, 1));

        let account = budget.account(savings).unwrap();
        assert_eq!(account.name(), "Savings");
        assert_eq!(account.balance(), Money::from(dec!(100.00)));

        let opening = account.transactions().next().unwrap();
        assert_eq!(opening.category_id(), Some(budget.tbb_category()));
        assert_eq!(budget.earliest_month(), Some(ym(2018, 1)));
        assert_eq!(budget.latest_month(), Some(ym(2018, 1)));
    }

    #[test]
    fn test_categories_keep_creation_order() {
        let mut budget = Budget::new("My Budget");
        let food = budget.add_category("Food & Beverages");
        let bills = budget.add_category("Bills");

        let ids: Vec<_> = budget.categories().map(|c| c.id()).collect();
        assert_eq!(ids, vec![budget.tbb_category(), food, bills]);
        assert_eq!(budget.find_category("Bills").unwrap().id(), bills);
        assert!(budget.find_category("Rent").is_none());
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut budget = Budget::new("My Budget");
        let food = budget.add_category("food");
        budget.rename_category(food, "Groceries").unwrap();

        let category = budget.category(food).unwrap();
        assert_eq!(category.id(), food);
        assert_eq!(category.name(), "Groceries");

        let err = budget.rename_category(CategoryId::new(), "x").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_handles() {
        let mut budget = Budget::new("My Budget");
        assert!(budget.account(AccountId::new()).is_none());
        assert!(budget.account_mut(AccountId::new()).is_none());
        assert!(budget.category(CategoryId::new()).is_none());
        assert!(budget.transaction(TransactionId::new()).is_none());
        assert!(budget.transaction_mut(TransactionId::new()).is_none());
    }

    #[test]
    fn test_month_range_only_widens() {
        let mut range = MonthRange::single(ym(2018, 5));
        range.widen(ym(2018, 3));
        range.widen(ym(2018, 4));
        range.widen(ym(2019, 1));
        assert_eq!(range.earliest, ym(2018, 3));
        assert_eq!(range.latest, ym(2019, 1));
    }
}
