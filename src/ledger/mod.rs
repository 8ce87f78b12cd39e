//! Budget domain models, persistence-friendly types, and aggregate views.

pub mod budget;
pub mod category;
pub mod document;
pub mod summary;
pub mod transaction;

pub use budget::{ArchivedBudget, Budget};
pub use category::{
    Category, CategoryAllocation, CategoryAllocations, CategoryInfo, ParseCategoryError,
    TransactionCategory, TransitAllocation, UNALLOCATED_SHARE,
};
pub use document::{LedgerDocument, CURRENT_SCHEMA_VERSION};
pub use summary::{BudgetSummary, CategoryAmount, CategoryBreakdown, DailySpending};
pub use transaction::{
    FareCharge, Transaction, TransactionKind, DEFAULT_INCOME_DESCRIPTION, TRANSIT_DISCOUNT_RATE,
};
