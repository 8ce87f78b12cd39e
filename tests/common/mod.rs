#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use budget_tracker::{
    core::{BudgetLedger, FixedClock},
    storage::JsonStorage,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid test date")
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a file-backed ledger at `path` whose calendar is pinned to `today`.
pub fn open_ledger_at(path: &PathBuf, today: NaiveDate) -> BudgetLedger {
    let storage = JsonStorage::new(path.clone()).expect("create json storage backend");
    BudgetLedger::open(Box::new(storage), Box::new(FixedClock::new(today)))
        .expect("open ledger")
}

/// Fresh file-backed ledger plus the path of its document.
pub fn setup_ledger(today: NaiveDate) -> (BudgetLedger, PathBuf) {
    let path = temp_base().join("budget.json");
    (open_ledger_at(&path, today), path)
}
