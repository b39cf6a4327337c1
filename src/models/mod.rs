//! Core data models for the ledger
//!
//! Plain data holders for the budgeting domain: identities, money, months,
//! accounts, categories and transactions. The rules that tie them together
//! live in [`crate::budget`].

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use account::Account;
pub use category::{Category, CategoryKind};
pub use ids::{AccountId, CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::YearMonth;
pub use transaction::{Transaction, TransactionKind};
