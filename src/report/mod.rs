//! Text rendering of ledger query results.

pub mod chart;

use std::fmt;

use crate::currency::{format_currency_value, format_date};
use crate::ledger::{ArchivedBudget, CategoryBreakdown, DailySpending, FareCharge, Transaction};

/// A transaction prepared for a list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLine {
    pub icon: &'static str,
    pub description: String,
    pub date: String,
    /// Signed: `-` for expenses, `+` for income.
    pub amount: String,
}

impl fmt::Display for TransactionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<36} {:>13} {:>12}",
            self.icon, self.description, self.date, self.amount
        )
    }
}

pub fn transaction_line(txn: &Transaction, symbol: &str) -> TransactionLine {
    let mut description = if txn.description.trim().is_empty() {
        txn.category.label().to_string()
    } else {
        txn.description.clone()
    };
    if txn.is_discounted_fare() {
        description.push_str(&format!(
            " (Saved {})",
            format_currency_value(txn.saved_amount, symbol)
        ));
    }
    let sign = if txn.is_expense() { '-' } else { '+' };
    TransactionLine {
        icon: txn.category.icon(),
        description,
        date: format_date(txn.date),
        amount: format!("{sign}{}", format_currency_value(txn.amount, symbol)),
    }
}

/// Multi-line summary of a day's expenses.
pub fn daily_summary_text(daily: &DailySpending, symbol: &str) -> String {
    if daily.is_empty() {
        return "No expenses for this day.".to_string();
    }
    let mut lines = vec![
        format!("Total Spent: {}", format_currency_value(daily.total, symbol)),
        "By Category:".to_string(),
    ];
    for entry in &daily.by_category {
        lines.push(format!(
            "  {} {:<16} {:>12}",
            entry.category.icon(),
            entry.category.label(),
            format_currency_value(entry.amount, symbol)
        ));
    }
    lines.push("Transactions:".to_string());
    for txn in &daily.transactions {
        lines.push(format!(
            "  {} {:<30} -{}",
            txn.category.icon(),
            txn.description,
            format_currency_value(txn.amount, symbol)
        ));
    }
    lines.join("\n")
}

pub fn biggest_expense_text(entry: Option<&CategoryBreakdown>, symbol: &str) -> String {
    match entry {
        None => "No expenses yet".to_string(),
        Some(entry) => format!(
            "{} {}: {} ({:.1}% of total spending)",
            entry.category.icon(),
            entry.category.label(),
            format_currency_value(entry.spent, symbol),
            entry.percentage
        ),
    }
}

/// One row of the category summary; `highlight` marks the biggest expense.
pub fn category_line(entry: &CategoryBreakdown, symbol: &str, highlight: bool) -> String {
    let marker = if highlight { "*" } else { " " };
    format!(
        "{marker} {} {:<16} {:>12} {:>6.1}%  (budget {}, left {})",
        entry.category.icon(),
        entry.category.label(),
        format_currency_value(entry.spent, symbol),
        entry.percentage,
        format_currency_value(entry.budget, symbol),
        format_currency_value(entry.remaining, symbol)
    )
}

pub fn archive_line(archived: &ArchivedBudget, symbol: &str) -> String {
    let budget = &archived.budget;
    format!(
        "{} | {} - {} | Total: {} | Saved: {}",
        budget.name,
        format_date(budget.start_date),
        format_date(budget.end_date),
        format_currency_value(budget.total_budget, symbol),
        format_currency_value(archived.savings, symbol)
    )
}

/// What a transit fare will cost with the discount, before it is recorded.
pub fn discount_preview(amount: f64) -> FareCharge {
    FareCharge::discounted(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Budget, Category, CategoryAmount};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn discounted_fare_line_mentions_savings() {
        let txn = Transaction::expense(40.0, Category::Transit, "Ride", day(), true);
        let line = transaction_line(&txn, "₱");
        assert_eq!(line.icon, "🚆");
        assert_eq!(line.description, "Ride (Saved ₱40.00)");
        assert_eq!(line.date, "Jan 5, 2025");
        assert_eq!(line.amount, "-₱20.00");
    }

    #[test]
    fn blank_description_falls_back_to_label() {
        let txn = Transaction::income(100.0, "", day());
        let line = transaction_line(&txn, "₱");
        assert_eq!(line.description, "Added Money");
        assert_eq!(line.amount, "+₱100.00");
    }

    #[test]
    fn daily_summary_lists_categories_and_entries() {
        assert_eq!(
            daily_summary_text(&DailySpending::empty(day()), "₱"),
            "No expenses for this day."
        );

        let lunch = Transaction::expense(60.0, Category::Food, "Lunch", day(), false);
        let daily = DailySpending {
            date: day(),
            total: 60.0,
            transactions: vec![lunch],
            by_category: vec![CategoryAmount {
                category: Category::Food,
                amount: 60.0,
            }],
        };
        let text = daily_summary_text(&daily, "₱");
        assert!(text.starts_with("Total Spent: ₱60.00"));
        assert!(text.contains("Food"));
        assert!(text.contains("Lunch"));
    }

    #[test]
    fn biggest_expense_reports_share() {
        assert_eq!(biggest_expense_text(None, "₱"), "No expenses yet");
        let entry = CategoryBreakdown {
            category: Category::Food,
            spent: 60.0,
            budget: 400.0,
            remaining: 340.0,
            percentage: 75.0,
        };
        assert_eq!(
            biggest_expense_text(Some(&entry), "₱"),
            "🍔 Food: ₱60.00 (75.0% of total spending)"
        );
    }

    #[test]
    fn archive_line_shows_period_and_savings() {
        let budget = Budget::new(
            "January",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            1000.0,
        );
        let archived = ArchivedBudget {
            budget,
            savings: 920.0,
        };
        assert_eq!(
            archive_line(&archived, "₱"),
            "January | Jan 1, 2025 - Jan 31, 2025 | Total: ₱1000.00 | Saved: ₱920.00"
        );
    }

    #[test]
    fn discount_preview_matches_ledger_rule() {
        let preview = discount_preview(100.0);
        assert_eq!(preview.charged, 50.0);
        assert_eq!(preview.saved, 100.0);
    }
}
