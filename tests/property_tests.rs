//! Property-based tests for the budget aggregate.
//!
//! Run with: cargo test --test property_tests

use chrono::NaiveDate;
use envelope_ledger::{Budget, LedgerError, Money, YearMonth};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_money() -> impl Strategy<Value = Money> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Money::from(Decimal::new(n, 2)))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2018i32..2020i32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn opening() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
}

// ============================================================================
// Ledger properties
// ============================================================================

proptest! {
    #[test]
    fn balance_is_sum_of_amounts(
        opening_balance in arb_money(),
        entries in prop::collection::vec((arb_date(), arb_money()), 0..30),
    ) {
        let mut budget = Budget::new("prop");
        let food = budget.add_category("Food");
        let acc = budget.add_account("Checking", opening_balance, opening());

        let mut expected = opening_balance;
        for (date, amount) in &entries {
            budget.add_transaction(acc, *date, *amount, "entry", Some(food), None).unwrap();
            expected += *amount;
        }

        prop_assert_eq!(budget.account(acc).unwrap().balance(), expected);
    }

    #[test]
    fn ledger_is_date_ordered(
        entries in prop::collection::vec((arb_date(), arb_money()), 1..30),
    ) {
        let mut budget = Budget::new("prop");
        let food = budget.add_category("Food");
        let acc = budget.add_account("Checking", Money::ZERO, opening());

        for (date, amount) in &entries {
            budget.add_transaction(acc, *date, *amount, "entry", Some(food), None).unwrap();
        }

        let dates: Vec<_> = budget.account(acc).unwrap().transactions().map(|t| t.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn transfers_are_symmetric(
        amount in arb_money(),
        date in arb_date(),
    ) {
        let mut budget = Budget::new("prop");
        let a = budget.add_account("A", Money::ZERO, opening());
        let b = budget.add_account("B", Money::ZERO, opening());
        let month = YearMonth::from_date(date);
        let tbb_before = budget.tbb(month);

        budget.add_transaction(a, date, amount, "transfer", None, Some(b)).unwrap();

        let balance_a = budget.account(a).unwrap().balance();
        let balance_b = budget.account(b).unwrap().balance();
        prop_assert_eq!(balance_a, amount);
        prop_assert_eq!(balance_b, -amount);
        prop_assert_eq!(balance_a + balance_b, Money::ZERO);
        prop_assert_eq!(budget.tbb(month), tbb_before);
    }

    #[test]
    fn classification_is_enforced(
        amount in arb_money(),
        date in arb_date(),
        prior in prop::collection::vec(arb_money(), 0..5),
    ) {
        let mut budget = Budget::new("prop");
        let food = budget.add_category("Food");
        let a = budget.add_account("A", Money::ZERO, opening());
        let b = budget.add_account("B", Money::ZERO, opening());
        for p in prior {
            budget.add_transaction(a, date, p, "prior", Some(food), None).unwrap();
        }

        prop_assert_eq!(
            budget.add_transaction(a, date, amount, "x", None, None),
            Err(LedgerError::MustHaveCategory)
        );
        prop_assert_eq!(
            budget.add_transaction(a, date, amount, "x", Some(food), Some(b)),
            Err(LedgerError::CannotAssignCategoryToTransfer)
        );
    }

    #[test]
    fn available_rolls_forward(
        months in prop::collection::vec((arb_money(), arb_money()), 1..12),
    ) {
        let mut budget = Budget::new("prop");
        let food = budget.add_category("Food");
        let acc = budget.add_account("Checking", Money::ZERO, opening());

        let mut month = YearMonth::from_date(opening());
        let mut running = Money::ZERO;
        for (budgeted, activity) in &months {
            budget.set_budgeted(month, food, *budgeted).unwrap();
            let day = month.first_day().unwrap();
            budget.add_transaction(acc, day, *activity, "spend", Some(food), None).unwrap();

            running += *budgeted + *activity;
            prop_assert_eq!(budget.available(month, food), running);
            month = month.next();
        }
    }

    #[test]
    fn recategorizing_twice_is_idempotent(
        amount in arb_money(),
        date in arb_date(),
    ) {
        let mut budget = Budget::new("prop");
        let food = budget.add_category("Food");
        let bills = budget.add_category("Bills");
        let acc = budget.add_account("Checking", Money::ZERO, opening());
        let month = YearMonth::from_date(date);

        let txn = budget.add_transaction(acc, date, amount, "x", Some(food), None).unwrap();

        budget.set_transaction_category(txn, Some(bills)).unwrap();
        let food_after = budget.activities(month, food);
        let bills_after = budget.activities(month, bills);

        budget.set_transaction_category(txn, Some(bills)).unwrap();
        prop_assert_eq!(budget.activities(month, food), food_after);
        prop_assert_eq!(budget.activities(month, bills), bills_after);
        prop_assert_eq!(bills_after, amount);
    }
}
