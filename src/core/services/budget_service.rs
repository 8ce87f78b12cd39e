use chrono::NaiveDate;
use tracing::info;

use crate::ledger::{ArchivedBudget, Budget};

use super::SummaryService;

/// Opens and closes budget periods.
pub struct BudgetService;

impl BudgetService {
    /// Creates a budget with the fixed category split of `total_amount`.
    pub fn create(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_amount: f64,
    ) -> Budget {
        let budget = Budget::new(name, start_date, end_date, total_amount);
        info!(
            budget = %budget.id,
            name = %budget.name,
            start = %budget.start_date,
            end = %budget.end_date,
            total = budget.total_budget,
            "created budget"
        );
        budget
    }

    /// Snapshots `budget` for the archive. The end date becomes `closed_on` and the
    /// remaining amount at this moment is recorded as savings.
    pub fn close(mut budget: Budget, closed_on: NaiveDate) -> ArchivedBudget {
        let savings = SummaryService::budget_summary(&budget).remaining;
        budget.end_date = closed_on;
        info!(budget = %budget.id, savings, closed_on = %closed_on, "closed budget");
        ArchivedBudget { budget, savings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::TransactionService;
    use crate::ledger::Category;

    #[test]
    fn close_records_savings_and_closing_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let planned_end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let closed_on = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let mut budget = BudgetService::create("January", start, planned_end, 1000.0);
        TransactionService::record_expense(&mut budget, 60.0, Category::Food, "Lunch", start, false);

        let archived = BudgetService::close(budget, closed_on);

        assert_eq!(archived.savings, 940.0);
        assert_eq!(archived.budget.end_date, closed_on);
        assert_eq!(archived.budget.start_date, start);
        assert_eq!(archived.budget.transaction_count(), 1);
    }
}
