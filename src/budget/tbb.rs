//! Month queries: activity, available and To Be Budgeted

use std::ops::Bound::{Excluded, Included};
use tracing::trace;

use super::Budget;
use crate::models::{CategoryId, Money, YearMonth};

impl Budget {
    /// Sum of transactions tagged to `category_id` that fall in `month`,
    /// across all accounts
    pub fn activities(&self, month: YearMonth, category_id: CategoryId) -> Money {
        self.transactions_by_category
            .get(&category_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.transactions.get(id))
            .filter(|txn| txn.month() == month)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Envelope balance of a category as of `month`
    ///
    /// Budgeted amounts and activity roll forward from the earliest recorded
    /// month, so unspent money and overspending both carry over. For a month
    /// before the earliest one only that month itself counts.
    pub fn available(&self, month: YearMonth, category_id: CategoryId) -> Money {
        let start = match self.months {
            Some(range) if range.earliest < month => range.earliest,
            _ => month,
        };

        let mut available = Money::ZERO;
        let mut current = start;
        loop {
            available += self.budgeted(current, category_id) + self.activities(current, category_id);
            if current >= month {
                break;
            }
            current = current.next();
        }
        available
    }

    /// Money not yet assigned to any category, as of `month`
    ///
    /// All inflow to the To Be Budgeted category up to `month`, less every
    /// amount budgeted up to `month`. A positive result is then reduced by
    /// amounts already budgeted in later months, stopping at zero: money
    /// committed ahead of time is not available now, but future budgeting
    /// never drives the figure below zero.
    pub fn tbb(&self, month: YearMonth) -> Money {
        let Some(range) = self.months else {
            return Money::ZERO;
        };

        let mut inflow = Money::ZERO;
        let mut allocated = Money::ZERO;
        if range.earliest <= month {
            inflow = self
                .tbb_transactions
                .range(range.earliest..=month)
                .flat_map(|(_, ids)| ids)
                .filter_map(|id| self.transactions.get(id))
                .map(|txn| txn.amount)
                .sum();
            allocated = self
                .budgeted
                .range(range.earliest..=month)
                .map(|(_, row)| row.values().sum::<Money>())
                .sum();
        }

        let mut tbb = inflow - allocated;

        if tbb.is_positive() && month < range.latest {
            for (_, row) in self
                .budgeted
                .range((Excluded(month), Included(range.latest)))
            {
                tbb -= row.values().sum::<Money>();
                if tbb.is_negative() {
                    tbb = Money::ZERO;
                    break;
                }
            }
        }

        trace!(%month, %inflow, %allocated, %tbb, "computed to be budgeted");
        tbb
    }
}
