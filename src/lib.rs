//! envelope-ledger - in-memory envelope budgeting core
//!
//! This library tracks money held in named accounts, classifies every
//! movement as a categorized income/expense or an inter-account transfer,
//! and computes per calendar month how much is budgeted, spent, available
//! and still To Be Budgeted for each category.
//!
//! # Architecture
//!
//! - `config`: Ledger settings
//! - `error`: Custom error types
//! - `models`: Core data models (months, money, accounts, categories, transactions)
//! - `budget`: The budget aggregate and its month queries
//!
//! The crate has no persistence, UI or I/O of its own beyond reading and
//! writing its settings file. Mutations emit `tracing` events; install a
//! subscriber in the embedding application to see them.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use envelope_ledger::{Budget, Money, YearMonth};
//!
//! let mut budget = Budget::new("Household");
//! let jan = YearMonth::new(2018, 1)?;
//! let savings = budget.add_account(
//!     "Savings",
//!     Money::parse("100.00").unwrap(),
//!     NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
//! );
//! let food = budget.add_category("Food");
//! budget.set_budgeted(jan, food, Money::parse("50.00").unwrap())?;
//!
//! budget.account_mut(savings).unwrap().add_transaction(
//!     NaiveDate::from_ymd_opt(2018, 1, 4).unwrap(),
//!     Money::parse("-5.00").unwrap(),
//!     "groceries",
//!     Some(food),
//!     None,
//! )?;
//!
//! assert_eq!(budget.tbb(jan), Money::parse("50.00").unwrap());
//! assert_eq!(budget.available(jan, food), Money::parse("45.00").unwrap());
//! # Ok::<(), envelope_ledger::LedgerError>(())
//! ```

pub mod budget;
pub mod config;
pub mod error;
pub mod models;

pub use budget::{
    AccountMut, AccountRef, Budget, BudgetOverview, CategoryBudgetSummary, CategoryRef,
    MonthRange, TransactionMut,
};
pub use config::Settings;
pub use error::{LedgerError, LedgerResult};
pub use models::{
    AccountId, CategoryId, CategoryKind, Money, Transaction, TransactionId, TransactionKind,
    YearMonth,
};
