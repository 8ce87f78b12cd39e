use chrono::NaiveDate;

use crate::ledger::{
    Budget, BudgetSummary, Category, CategoryAmount, CategoryBreakdown, DailySpending, Transaction,
};

/// Pure aggregate queries over a budget.
pub struct SummaryService;

impl SummaryService {
    pub fn budget_summary(budget: &Budget) -> BudgetSummary {
        let total_spent = budget.total_spent();
        BudgetSummary {
            total_budget: budget.total_budget,
            total_spent,
            remaining: budget.total_budget - total_spent,
            added_money: budget.added_money,
        }
    }

    /// One entry per category in [`Category::ALL`] order.
    pub fn category_breakdown(budget: &Budget) -> Vec<CategoryBreakdown> {
        let total_spent = budget.total_spent();
        budget
            .categories
            .iter()
            .map(|(category, allocation)| CategoryBreakdown {
                category,
                spent: allocation.spent,
                budget: allocation.budget,
                remaining: allocation.remaining(),
                percentage: if total_spent > 0.0 {
                    allocation.spent / total_spent * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Category with the highest spending; ties go to the earlier category.
    pub fn biggest_expense(budget: &Budget) -> Option<CategoryBreakdown> {
        Self::category_breakdown(budget)
            .into_iter()
            .reduce(|max, entry| if entry.spent > max.spent { entry } else { max })
    }

    pub fn daily_spending(budget: &Budget, date: NaiveDate) -> DailySpending {
        let transactions: Vec<Transaction> = Self::expenses_on(budget, date).cloned().collect();
        let total = transactions.iter().map(|txn| txn.amount).sum();
        DailySpending {
            date,
            total,
            transactions,
            by_category: Self::daily_category_breakdown(budget, date),
        }
    }

    /// Per-category totals for `date`, listing only categories with spending that day.
    pub fn daily_category_breakdown(budget: &Budget, date: NaiveDate) -> Vec<CategoryAmount> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let mut matched = Self::expenses_on(budget, date)
                    .filter(|txn| txn.expense_category() == Some(category))
                    .peekable();
                matched.peek()?;
                Some(CategoryAmount {
                    category,
                    amount: matched.map(|txn| txn.amount).sum(),
                })
            })
            .collect()
    }

    /// Up to `limit` transactions, newest date first. Same-day entries keep insertion order.
    pub fn recent_transactions(budget: &Budget, limit: usize) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = budget.transactions.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered.truncate(limit);
        ordered
    }

    fn expenses_on(budget: &Budget, date: NaiveDate) -> impl Iterator<Item = &Transaction> + '_ {
        budget
            .transactions
            .iter()
            .filter(move |txn| txn.is_expense() && txn.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TransactionService;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn sample_budget() -> Budget {
        let mut budget = Budget::new("Summary", day(1), day(31), 1000.0);
        TransactionService::record_expense(&mut budget, 60.0, Category::Food, "Lunch", day(5), false);
        TransactionService::record_expense(&mut budget, 40.0, Category::Transit, "Ride", day(5), true);
        TransactionService::record_expense(&mut budget, 15.0, Category::Food, "Coffee", day(6), false);
        TransactionService::record_income(&mut budget, 200.0, Some("Bonus"), day(5));
        budget
    }

    #[test]
    fn summary_totals_match_categories() {
        let budget = sample_budget();
        let summary = SummaryService::budget_summary(&budget);
        let breakdown_total: f64 = SummaryService::category_breakdown(&budget)
            .iter()
            .map(|entry| entry.spent)
            .sum();

        assert_eq!(summary.total_spent, breakdown_total);
        assert_eq!(summary.total_budget, 1200.0);
        assert_eq!(summary.remaining, 1200.0 - 95.0);
        assert_eq!(summary.added_money, 200.0);
    }

    #[test]
    fn percentages_are_zero_without_spending() {
        let budget = Budget::new("Empty", day(1), day(31), 500.0);
        let breakdown = SummaryService::category_breakdown(&budget);
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown.iter().all(|entry| entry.percentage == 0.0));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let budget = sample_budget();
        let sum: f64 = SummaryService::category_breakdown(&budget)
            .iter()
            .map(|entry| entry.percentage)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn biggest_expense_prefers_first_on_tie() {
        let budget = Budget::new("Tie", day(1), day(31), 500.0);
        let biggest = SummaryService::biggest_expense(&budget).expect("breakdown is never empty");
        assert_eq!(biggest.category, Category::Transportation);

        let budget = sample_budget();
        let biggest = SummaryService::biggest_expense(&budget).unwrap();
        assert_eq!(biggest.category, Category::Food);
    }

    #[test]
    fn daily_spending_excludes_income_and_other_days() {
        let budget = sample_budget();
        let daily = SummaryService::daily_spending(&budget, day(5));

        assert_eq!(daily.total, 80.0);
        assert_eq!(daily.transactions.len(), 2);
        assert_eq!(
            daily.by_category,
            vec![
                CategoryAmount {
                    category: Category::Food,
                    amount: 60.0
                },
                CategoryAmount {
                    category: Category::Transit,
                    amount: 20.0
                },
            ]
        );
        assert!(SummaryService::daily_spending(&budget, day(9)).is_empty());
    }

    #[test]
    fn recent_transactions_sorts_by_date_and_limits() {
        let budget = sample_budget();
        let recent = SummaryService::recent_transactions(&budget, 2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "Coffee");
        assert_eq!(recent[1].description, "Lunch");
        assert_eq!(budget.transactions[0].description, "Lunch");
        assert_eq!(budget.transaction_count(), 4);
    }
}
