#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a single active spending budget split across fixed
//! categories, records expenses and income against it, and archives closed
//! budgets together with what was saved.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

pub use crate::core::BudgetLedger;
pub use crate::errors::LedgerError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
