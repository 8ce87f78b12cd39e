use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{Category, TransactionCategory};

/// Fraction of a transit fare that is charged when the discount applies.
pub const TRANSIT_DISCOUNT_RATE: f64 = 0.5;

/// Description recorded on income entries when no source is given.
pub const DEFAULT_INCOME_DESCRIPTION: &str = "Added money";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Charged and saved amounts for a fare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareCharge {
    pub charged: f64,
    pub saved: f64,
}

impl FareCharge {
    /// Applies the transit discount to `amount`. The saved figure records the
    /// undiscounted fare, which is what the transit savings counter tracks.
    pub fn discounted(amount: f64) -> Self {
        Self {
            charged: amount * TRANSIT_DISCOUNT_RATE,
            saved: amount,
        }
    }

    pub fn full(amount: f64) -> Self {
        Self {
            charged: amount,
            saved: 0.0,
        }
    }
}

/// A single income or expense entry owned by a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Effective amount: what was charged for expenses, what was added for income.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_amount: Option<f64>,
    pub category: TransactionCategory,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub apply_discount: bool,
    #[serde(default)]
    pub saved_amount: f64,
}

impl Transaction {
    pub fn income(amount: f64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Income,
            amount,
            full_amount: None,
            category: TransactionCategory::AddedMoney,
            description: description.into(),
            date,
            apply_discount: false,
            saved_amount: 0.0,
        }
    }

    /// Builds an expense, applying the fare discount when `apply_discount` is
    /// set on a category that supports it. The flag is dropped otherwise.
    pub fn expense(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
        apply_discount: bool,
    ) -> Self {
        let discounted = apply_discount && category.supports_discount();
        let charge = if discounted {
            FareCharge::discounted(amount)
        } else {
            FareCharge::full(amount)
        };
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            amount: charge.charged,
            full_amount: Some(amount),
            category: TransactionCategory::Expense(category),
            description: description.into(),
            date,
            apply_discount: discounted,
            saved_amount: charge.saved,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn expense_category(&self) -> Option<Category> {
        if self.is_expense() {
            self.category.category()
        } else {
            None
        }
    }

    /// True for transit expenses that went through the fare discount.
    pub fn is_discounted_fare(&self) -> bool {
        self.expense_category() == Some(Category::Transit) && self.apply_discount
    }
}
