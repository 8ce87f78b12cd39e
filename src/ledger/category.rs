//! The fixed spending categories and their per-budget allocations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Share of the total budget that is never allocated to a category.
pub const UNALLOCATED_SHARE: f64 = 0.30;

/// One of the three spending categories every budget carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transportation,
    Food,
    #[serde(alias = "lrt")]
    Transit,
}

/// Display and allocation metadata for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub share: f64,
    pub color: &'static str,
}

const CATEGORY_TABLE: [CategoryInfo; 3] = [
    CategoryInfo {
        key: "transportation",
        label: "Transportation",
        icon: "🚗",
        share: 0.20,
        color: "#4f46e5",
    },
    CategoryInfo {
        key: "food",
        label: "Food",
        icon: "🍔",
        share: 0.40,
        color: "#10b981",
    },
    CategoryInfo {
        key: "transit",
        label: "Transit Fare",
        icon: "🚆",
        share: 0.10,
        color: "#f59e0b",
    },
];

impl Category {
    /// Every category, in breakdown order.
    pub const ALL: [Category; 3] = [Category::Transportation, Category::Food, Category::Transit];

    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Transportation => &CATEGORY_TABLE[0],
            Category::Food => &CATEGORY_TABLE[1],
            Category::Transit => &CATEGORY_TABLE[2],
        }
    }

    /// Wire name used in persisted documents and CLI input.
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    /// Fraction of the budget total allocated at creation.
    pub fn share(self) -> f64 {
        self.info().share
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    /// Only transit fares qualify for the fare discount.
    pub fn supports_discount(self) -> bool {
        matches!(self, Category::Transit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}` (expected transportation, food or transit)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "transportation" => Ok(Category::Transportation),
            "food" => Ok(Category::Food),
            "transit" | "lrt" => Ok(Category::Transit),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Category recorded on a transaction: a spending category for expenses or
/// the synthetic `added_money` bucket for income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum TransactionCategory {
    Expense(Category),
    AddedMoney,
}

const ADDED_MONEY_KEY: &str = "added_money";

impl TransactionCategory {
    pub fn key(self) -> &'static str {
        match self {
            TransactionCategory::Expense(category) => category.key(),
            TransactionCategory::AddedMoney => ADDED_MONEY_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionCategory::Expense(category) => category.label(),
            TransactionCategory::AddedMoney => "Added Money",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TransactionCategory::Expense(category) => category.icon(),
            TransactionCategory::AddedMoney => "💰",
        }
    }

    pub fn category(self) -> Option<Category> {
        match self {
            TransactionCategory::Expense(category) => Some(category),
            TransactionCategory::AddedMoney => None,
        }
    }
}

impl From<Category> for TransactionCategory {
    fn from(category: Category) -> Self {
        TransactionCategory::Expense(category)
    }
}

impl From<TransactionCategory> for String {
    fn from(category: TransactionCategory) -> Self {
        category.key().to_string()
    }
}

impl TryFrom<String> for TransactionCategory {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == ADDED_MONEY_KEY {
            return Ok(TransactionCategory::AddedMoney);
        }
        value.parse().map(TransactionCategory::Expense)
    }
}

/// Allocated and spent amounts for one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryAllocation {
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
}

impl CategoryAllocation {
    pub fn with_budget(budget: f64) -> Self {
        Self { budget, spent: 0.0 }
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}

/// Transit allocation with the fare-discount counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransitAllocation {
    #[serde(flatten)]
    pub allocation: CategoryAllocation,
    #[serde(default)]
    pub trips: u32,
    #[serde(default)]
    pub saved: f64,
}

/// The allocations of a single budget, one slot per [`Category`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryAllocations {
    pub transportation: CategoryAllocation,
    pub food: CategoryAllocation,
    #[serde(alias = "lrt")]
    pub transit: TransitAllocation,
}

impl CategoryAllocations {
    /// Splits `total` by the fixed category shares. Never recomputed afterwards.
    pub fn from_total(total: f64) -> Self {
        Self {
            transportation: CategoryAllocation::with_budget(total * Category::Transportation.share()),
            food: CategoryAllocation::with_budget(total * Category::Food.share()),
            transit: TransitAllocation {
                allocation: CategoryAllocation::with_budget(total * Category::Transit.share()),
                trips: 0,
                saved: 0.0,
            },
        }
    }

    pub fn get(&self, category: Category) -> &CategoryAllocation {
        match category {
            Category::Transportation => &self.transportation,
            Category::Food => &self.food,
            Category::Transit => &self.transit.allocation,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CategoryAllocation {
        match category {
            Category::Transportation => &mut self.transportation,
            Category::Food => &mut self.food,
            Category::Transit => &mut self.transit.allocation,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryAllocation)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total_spent(&self) -> f64 {
        self.iter().map(|(_, allocation)| allocation.spent).sum()
    }

    pub fn total_allocated(&self) -> f64 {
        self.iter().map(|(_, allocation)| allocation.budget).sum()
    }
}
