//! Category model
//!
//! A category is an envelope money can be budgeted into and spent from.
//! Every budget also owns exactly one To Be Budgeted category whose
//! budgeted figure is derived rather than stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Where a category's budgeted figure comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Budgeted amounts are stored per month
    #[default]
    Envelope,
    /// Budgeted amount is always the derived To Be Budgeted balance
    ToBeBudgeted,
}

/// A budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name; may change without affecting identity
    pub name: String,

    pub kind: CategoryKind,
}

impl Category {
    pub(crate) fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
        }
    }

    /// Check if this is the To Be Budgeted category
    pub fn is_tbb(&self) -> bool {
        self.kind == CategoryKind::ToBeBudgeted
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
