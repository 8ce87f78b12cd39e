mod common;

use std::fs;

use budget_tracker::{
    ledger::{Category, LedgerDocument},
    storage::{JsonStorage, StorageBackend},
    utils::persistence::tmp_path,
    LedgerError,
};
use common::{date, open_ledger_at, setup_ledger};

#[test]
fn reopening_reproduces_state() {
    let (mut ledger, path) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    ledger
        .add_expense(40.0, Category::Transit, "Ride", date(1, 5), true)
        .unwrap();
    ledger.add_money(100.0, Some("Allowance")).unwrap();

    let reopened = open_ledger_at(&path, date(1, 5));
    assert_eq!(reopened.document(), ledger.document());

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"schemaVersion\": 1"));
    assert!(raw.contains("\"activeBudget\""));
    assert!(raw.contains("\"applyDiscount\": true"));
    assert!(raw.contains("\"fullAmount\": 40.0"));
    assert!(raw.contains("\"category\": \"added_money\""));
}

#[test]
fn archive_survives_reload_most_recent_first() {
    let (mut ledger, path) = setup_ledger(date(2, 1));
    ledger
        .create_budget("January", date(1, 1), date(1, 31), 500.0)
        .unwrap();
    ledger.end_current_budget().unwrap();
    ledger
        .create_budget("February", date(2, 1), date(2, 28), 700.0)
        .unwrap();
    ledger.end_current_budget().unwrap();

    let reopened = open_ledger_at(&path, date(2, 1));
    let names: Vec<_> = reopened.archive().iter().map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["February", "January"]);
    assert!(reopened.active_budget().is_none());
}

#[test]
fn failed_save_leaves_state_unchanged() {
    let (mut ledger, path) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    let before = ledger.document().clone();

    // A directory at the staging path makes the write fail.
    fs::create_dir_all(tmp_path(&path)).unwrap();

    let result = ledger.add_expense(60.0, Category::Food, "Lunch", date(1, 5), false);
    assert!(matches!(result, Err(LedgerError::Io(_))));
    assert_eq!(ledger.document(), &before);

    let on_disk: LedgerDocument =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&on_disk, &before);
}

#[test]
fn legacy_documents_without_version_load() {
    let (_, path) = setup_ledger(date(1, 5));
    fs::write(&path, r#"{"activeBudget": null, "archive": []}"#).unwrap();

    let storage = JsonStorage::new(path.clone()).unwrap();
    let document = storage.load().unwrap().unwrap();
    assert_eq!(document.schema_version, 1);
    assert!(document.is_empty());
}

#[test]
fn future_schema_is_rejected() {
    let (_, path) = setup_ledger(date(1, 5));
    fs::write(&path, r#"{"schemaVersion": 2, "activeBudget": null, "archive": []}"#).unwrap();

    let storage = JsonStorage::new(path.clone()).unwrap();
    let result = budget_tracker::BudgetLedger::open(
        Box::new(storage),
        Box::new(budget_tracker::core::FixedClock::new(date(1, 5))),
    );
    assert!(matches!(result, Err(LedgerError::Persistence(_))));
}

#[test]
fn malformed_dates_fail_to_load() {
    let (mut ledger, path) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    fs::write(&path, raw.replace("2025-01-31", "31/01/2025")).unwrap();

    let storage = JsonStorage::new(path.clone()).unwrap();
    assert!(matches!(storage.load(), Err(LedgerError::Serde(_))));
}
