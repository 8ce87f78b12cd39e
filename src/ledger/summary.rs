//! Read-only aggregate views derived from a budget.

use chrono::NaiveDate;
use serde::Serialize;

use super::{category::Category, transaction::Transaction};

/// Headline totals for the active budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub added_money: f64,
}

/// Spending versus allocation for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub spent: f64,
    pub budget: f64,
    pub remaining: f64,
    /// Share of the budget's total spending, 0-100.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub category: Category,
    pub amount: f64,
}

/// Expenses recorded on a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub total: f64,
    pub transactions: Vec<Transaction>,
    pub by_category: Vec<CategoryAmount>,
}

impl DailySpending {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total: 0.0,
            transactions: Vec::new(),
            by_category: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
