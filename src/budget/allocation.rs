//! Budgeted amounts per month and category

use tracing::debug;

use super::Budget;
use crate::error::LedgerResult;
use crate::models::{CategoryId, CategoryKind, Money, YearMonth};

impl Budget {
    /// Amount budgeted to a category in a month
    ///
    /// For the To Be Budgeted category this is the derived [`Budget::tbb`]
    /// balance. Months without an entry, and unknown categories, read as zero.
    pub fn budgeted(&self, month: YearMonth, category_id: CategoryId) -> Money {
        match self.categories.get(&category_id).map(|c| c.kind) {
            Some(CategoryKind::ToBeBudgeted) => self.tbb(month),
            Some(CategoryKind::Envelope) => self.stored_budgeted(month, category_id),
            None => Money::ZERO,
        }
    }

    /// Overwrite the amount budgeted to a category in a month
    ///
    /// Ignored for the To Be Budgeted category, whose figure is always derived.
    pub fn set_budgeted(
        &mut self,
        month: YearMonth,
        category_id: CategoryId,
        amount: Money,
    ) -> LedgerResult<()> {
        let kind = self.require_category(category_id)?.kind;
        match kind {
            CategoryKind::ToBeBudgeted => {
                debug!(%month, %amount, "ignored budgeted write to To Be Budgeted");
            }
            CategoryKind::Envelope => {
                self.budgeted
                    .entry(month)
                    .or_default()
                    .insert(category_id, amount);
                self.widen_months(month);
                debug!(%month, category = %category_id, %amount, "set budgeted");
            }
        }
        Ok(())
    }

    /// Move `amount` of budgeted money from one category to another
    ///
    /// A negative amount moves money the other way. Either side may be the
    /// To Be Budgeted category; that side is simply not written.
    pub fn move_budgeted(
        &mut self,
        month: YearMonth,
        from: CategoryId,
        to: CategoryId,
        amount: Money,
    ) -> LedgerResult<()> {
        self.require_category(from)?;
        self.require_category(to)?;

        let from_amount = self.budgeted(month, from) - amount;
        let to_amount = self.budgeted(month, to) + amount;

        self.set_budgeted(month, from, from_amount)?;
        self.set_budgeted(month, to, to_amount)
    }

    /// Sum of every category's budgeted amount in a month
    pub fn total_budgeted(&self, month: YearMonth) -> Money {
        self.budgeted
            .get(&month)
            .map(|row| row.values().sum::<Money>())
            .unwrap_or(Money::ZERO)
    }

    fn stored_budgeted(&self, month: YearMonth, category_id: CategoryId) -> Money {
        self.budgeted
            .get(&month)
            .and_then(|row| row.get(&category_id))
            .copied()
            .unwrap_or(Money::ZERO)
    }
}
