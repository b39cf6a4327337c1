//! Month overview across all spending categories

use std::fmt;

use super::Budget;
use crate::models::{CategoryId, Money, YearMonth};

/// A summary of a category's budget status for a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBudgetSummary {
    pub category_id: CategoryId,
    pub name: String,
    pub month: YearMonth,

    /// Amount budgeted this month
    pub budgeted: Money,

    /// Sum of this month's transactions; negative means spending
    pub activity: Money,

    /// Envelope balance carried forward to the end of this month
    pub available: Money,
}

impl CategoryBudgetSummary {
    /// Check if this category is overspent (available is negative)
    pub fn is_overspent(&self) -> bool {
        self.available.is_negative()
    }
}

impl fmt::Display for CategoryBudgetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Budgeted: {} | Activity: {} | Available: {}",
            self.name, self.budgeted, self.activity, self.available
        )
    }
}

/// Budget overview for a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub month: YearMonth,
    pub total_budgeted: Money,
    pub total_activity: Money,
    pub total_available: Money,
    pub to_be_budgeted: Money,
    /// Spending categories in creation order; To Be Budgeted is reported
    /// separately as `to_be_budgeted`
    pub categories: Vec<CategoryBudgetSummary>,
}

impl BudgetOverview {
    pub fn overspent(&self) -> impl Iterator<Item = &CategoryBudgetSummary> {
        self.categories.iter().filter(|c| c.is_overspent())
    }
}

impl Budget {
    /// Summarize every spending category for a month
    pub fn overview(&self, month: YearMonth) -> BudgetOverview {
        let mut categories = Vec::new();
        let mut total_budgeted = Money::ZERO;
        let mut total_activity = Money::ZERO;
        let mut total_available = Money::ZERO;

        for category in self.categories().filter(|c| !c.is_tbb()) {
            let summary = CategoryBudgetSummary {
                category_id: category.id(),
                name: category.name().to_string(),
                month,
                budgeted: category.budgeted(month),
                activity: category.activities(month),
                available: category.available(month),
            };
            total_budgeted += summary.budgeted;
            total_activity += summary.activity;
            total_available += summary.available;
            categories.push(summary);
        }

        BudgetOverview {
            month,
            total_budgeted,
            total_activity,
            total_available,
            to_be_budgeted: self.tbb(month),
            categories,
        }
    }
}
