use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::CategoryAllocations, transaction::Transaction};

/// A budget period with its allocations and transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Grows when income is added.
    pub total_budget: f64,
    #[serde(default)]
    pub added_money: f64,
    pub categories: CategoryAllocations,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_budget: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
            total_budget,
            added_money: 0.0,
            categories: CategoryAllocations::from_total(total_budget),
            transactions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_spent(&self) -> f64 {
        self.categories.total_spent()
    }

    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent()
    }

    /// True once `today` is strictly past the recorded end date.
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        today > self.end_date
    }
}

/// Immutable snapshot of a closed budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchivedBudget {
    #[serde(flatten)]
    pub budget: Budget,
    /// Remaining amount at closure time.
    pub savings: f64,
}

impl ArchivedBudget {
    pub fn name(&self) -> &str {
        &self.budget.name
    }
}
