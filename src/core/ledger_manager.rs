use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::services::{BudgetService, SummaryService, TransactionService};
use crate::core::time::{Clock, SystemClock};
use crate::errors::LedgerError;
use crate::ledger::{
    ArchivedBudget, Budget, BudgetSummary, Category, CategoryBreakdown, DailySpending,
    LedgerDocument, Transaction, CURRENT_SCHEMA_VERSION,
};
use crate::report::chart::SpendingChart;
use crate::storage::StorageBackend;

/// Owns the active budget and the archive, and persists every mutation.
///
/// Guards ("no active budget", "transaction not found") are reported through
/// the return value and leave state untouched. `Err` is reserved for storage
/// failures; a mutation whose save fails is not applied in memory either.
pub struct BudgetLedger {
    document: LedgerDocument,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl BudgetLedger {
    /// Loads the stored document once and takes ownership of the backend.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let document = match storage.load()? {
            Some(document) => {
                ensure_schema_support(document.schema_version)?;
                document
            }
            None => LedgerDocument::default(),
        };
        info!(
            location = %storage.describe(),
            active = document.active_budget.is_some(),
            archived = document.archive.len(),
            "opened budget ledger"
        );
        Ok(Self {
            document,
            storage,
            clock,
        })
    }

    pub fn with_system_clock(storage: Box<dyn StorageBackend>) -> Result<Self, LedgerError> {
        Self::open(storage, Box::new(SystemClock))
    }

    pub fn active_budget(&self) -> Option<&Budget> {
        self.document.active_budget.as_ref()
    }

    /// Closed budgets, most recent first.
    pub fn archive(&self) -> &[ArchivedBudget] {
        &self.document.archive
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.document
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Replaces any active budget with a fresh one. The previous budget is
    /// discarded without being archived.
    pub fn create_budget(
        &mut self,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_amount: f64,
    ) -> Result<Budget, LedgerError> {
        let budget = BudgetService::create(name, start_date, end_date, total_amount);
        if let Some(previous) = self.document.active_budget.as_ref() {
            warn!(previous = %previous.id, "replacing active budget without archiving it");
        }
        let mut snapshot = self.document.clone();
        snapshot.active_budget = Some(budget.clone());
        self.persist(snapshot)?;
        Ok(budget)
    }

    /// Adds income dated today. Returns `false` when there is no active budget.
    pub fn add_money(&mut self, amount: f64, source: Option<&str>) -> Result<bool, LedgerError> {
        let today = self.clock.today();
        let recorded = self.mutate_active(|budget| {
            Some(TransactionService::record_income(budget, amount, source, today))
        })?;
        if recorded.is_none() {
            warn!("add money ignored: no active budget");
        }
        Ok(recorded.is_some())
    }

    /// Records an expense. Returns `None` when there is no active budget.
    pub fn add_expense(
        &mut self,
        amount: f64,
        category: Category,
        description: &str,
        date: NaiveDate,
        apply_discount: bool,
    ) -> Result<Option<Transaction>, LedgerError> {
        let recorded = self.mutate_active(|budget| {
            Some(TransactionService::record_expense(
                budget,
                amount,
                category,
                description,
                date,
                apply_discount,
            ))
        })?;
        if recorded.is_none() {
            warn!(category = category.key(), "expense ignored: no active budget");
        }
        Ok(recorded)
    }

    /// Deletes a transaction and reverses its effect on the budget.
    pub fn delete_transaction(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        let removed = self.mutate_active(|budget| TransactionService::remove(budget, id))?;
        if removed.is_none() {
            warn!(txn = %id, "delete ignored: no active budget or unknown transaction");
        }
        Ok(removed.is_some())
    }

    pub fn budget_summary(&self) -> Option<BudgetSummary> {
        self.active_budget().map(SummaryService::budget_summary)
    }

    pub fn category_breakdown(&self) -> Vec<CategoryBreakdown> {
        self.active_budget()
            .map(SummaryService::category_breakdown)
            .unwrap_or_default()
    }

    pub fn biggest_expense(&self) -> Option<CategoryBreakdown> {
        self.active_budget().and_then(SummaryService::biggest_expense)
    }

    pub fn daily_spending(&self, date: NaiveDate) -> DailySpending {
        match self.active_budget() {
            Some(budget) => SummaryService::daily_spending(budget, date),
            None => DailySpending::empty(date),
        }
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        match self.active_budget() {
            Some(budget) => SummaryService::recent_transactions(budget, limit),
            None => Vec::new(),
        }
    }

    pub fn spending_chart(&self) -> SpendingChart {
        SpendingChart::from_breakdown(&self.category_breakdown())
    }

    /// Moves the active budget to the front of the archive, closing it today.
    pub fn end_current_budget(&mut self) -> Result<Option<ArchivedBudget>, LedgerError> {
        let Some(active) = self.document.active_budget.clone() else {
            warn!("end budget ignored: no active budget");
            return Ok(None);
        };
        let archived = BudgetService::close(active, self.clock.today());
        let mut snapshot = self.document.clone();
        snapshot.active_budget = None;
        snapshot.archive.insert(0, archived.clone());
        self.persist(snapshot)?;
        Ok(Some(archived))
    }

    /// True when an active budget exists and today is past its end date.
    pub fn check_budget_end(&self) -> bool {
        let today = self.clock.today();
        self.active_budget()
            .is_some_and(|budget| budget.has_ended(today))
    }

    /// Applies `mutate` to a copy of the active budget and persists it. Nothing
    /// is saved when there is no active budget or `mutate` returns `None`.
    fn mutate_active<T>(
        &mut self,
        mutate: impl FnOnce(&mut Budget) -> Option<T>,
    ) -> Result<Option<T>, LedgerError> {
        let mut snapshot = self.document.clone();
        let Some(budget) = snapshot.active_budget.as_mut() else {
            return Ok(None);
        };
        let Some(outcome) = mutate(budget) else {
            return Ok(None);
        };
        self.persist(snapshot)?;
        Ok(Some(outcome))
    }

    fn persist(&mut self, snapshot: LedgerDocument) -> Result<(), LedgerError> {
        self.storage.save(&snapshot)?;
        debug!(location = %self.storage.describe(), "persisted ledger");
        self.document = snapshot;
        Ok(())
    }
}

fn ensure_schema_support(schema_version: u8) -> Result<(), LedgerError> {
    if schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::Persistence(format!(
            "ledger schema v{} is newer than supported v{}",
            schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(())
}
