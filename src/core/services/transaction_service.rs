use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::ledger::{Budget, Category, Transaction, TransactionKind, DEFAULT_INCOME_DESCRIPTION};

/// Records and removes transactions while keeping category counters in step.
pub struct TransactionService;

impl TransactionService {
    /// Appends an expense and charges its effective amount to the category.
    pub fn record_expense(
        budget: &mut Budget,
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
        apply_discount: bool,
    ) -> Transaction {
        let txn = Transaction::expense(amount, category, description, date, apply_discount);
        budget.categories.get_mut(category).spent += txn.amount;
        if txn.is_discounted_fare() {
            budget.categories.transit.trips += 1;
            budget.categories.transit.saved += txn.saved_amount;
        }
        debug!(
            budget = %budget.id,
            txn = %txn.id,
            category = category.key(),
            amount = txn.amount,
            "recorded expense"
        );
        budget.transactions.push(txn.clone());
        txn
    }

    /// Appends an income entry and raises the budget total.
    pub fn record_income(
        budget: &mut Budget,
        amount: f64,
        source: Option<&str>,
        date: NaiveDate,
    ) -> Transaction {
        let description = source
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_INCOME_DESCRIPTION);
        let txn = Transaction::income(amount, description, date);
        budget.total_budget += amount;
        budget.added_money += amount;
        debug!(budget = %budget.id, txn = %txn.id, amount, "recorded income");
        budget.transactions.push(txn.clone());
        txn
    }

    /// Removes a transaction and reverses its effect. Returns `None` when the id is unknown.
    pub fn remove(budget: &mut Budget, id: Uuid) -> Option<Transaction> {
        let index = budget.transactions.iter().position(|txn| txn.id == id)?;
        let txn = budget.transactions.remove(index);
        match (txn.kind, txn.expense_category()) {
            (TransactionKind::Expense, Some(category)) => {
                budget.categories.get_mut(category).spent -= txn.amount;
                if txn.is_discounted_fare() {
                    let transit = &mut budget.categories.transit;
                    transit.trips = transit.trips.saturating_sub(1);
                    transit.saved -= txn.saved_amount;
                }
            }
            _ => {
                budget.total_budget -= txn.amount;
                budget.added_money -= txn.amount;
            }
        }
        debug!(budget = %budget.id, txn = %txn.id, "removed transaction");
        Some(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> Budget {
        Budget::new(
            "Transactions",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            1000.0,
        )
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn discounted_fare_updates_transit_counters() {
        let mut budget = budget();
        let txn =
            TransactionService::record_expense(&mut budget, 40.0, Category::Transit, "Ride", day(5), true);

        assert_eq!(txn.amount, 20.0);
        assert_eq!(budget.categories.transit.allocation.spent, 20.0);
        assert_eq!(budget.categories.transit.saved, 40.0);
        assert_eq!(budget.categories.transit.trips, 1);
    }

    #[test]
    fn removing_an_expense_restores_counters() {
        let mut budget = budget();
        TransactionService::record_expense(&mut budget, 12.5, Category::Transit, "Early", day(2), true);
        let before = budget.categories.clone();

        let txn =
            TransactionService::record_expense(&mut budget, 30.0, Category::Transit, "Ride", day(3), true);
        let removed = TransactionService::remove(&mut budget, txn.id).expect("transaction exists");

        assert_eq!(removed.id, txn.id);
        assert_eq!(budget.categories, before);
        assert_eq!(budget.transaction_count(), 1);
    }

    #[test]
    fn zero_fare_with_discount_still_counts_a_trip() {
        let mut budget = budget();
        let before = budget.categories.clone();

        let txn =
            TransactionService::record_expense(&mut budget, 0.0, Category::Transit, "Free ride", day(6), true);
        assert!(txn.apply_discount);
        assert_eq!(budget.categories.transit.trips, 1);
        assert_eq!(budget.categories.transit.saved, 0.0);

        TransactionService::remove(&mut budget, txn.id).expect("transaction exists");
        assert_eq!(budget.categories, before);
    }

    #[test]
    fn removing_income_lowers_the_total() {
        let mut budget = budget();
        let txn = TransactionService::record_income(&mut budget, 300.0, Some("  "), day(4));
        assert_eq!(txn.description, DEFAULT_INCOME_DESCRIPTION);
        assert_eq!(budget.total_budget, 1300.0);

        TransactionService::remove(&mut budget, txn.id).expect("income exists");
        assert_eq!(budget.total_budget, 1000.0);
        assert_eq!(budget.added_money, 0.0);
        assert_eq!(budget.categories.food.budget, 400.0);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut budget = budget();
        TransactionService::record_expense(&mut budget, 9.0, Category::Food, "Snack", day(1), false);
        assert!(TransactionService::remove(&mut budget, Uuid::new_v4()).is_none());
        assert_eq!(budget.categories.food.spent, 9.0);
    }
}
