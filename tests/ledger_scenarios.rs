mod common;

use budget_tracker::ledger::Category;
use common::{date, setup_ledger};

fn seeded() -> budget_tracker::BudgetLedger {
    let (mut ledger, _) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    ledger
        .add_expense(60.0, Category::Food, "Lunch", date(1, 5), false)
        .unwrap()
        .expect("active budget");
    ledger
        .add_expense(40.0, Category::Transit, "Ride", date(1, 5), true)
        .unwrap()
        .expect("active budget");
    ledger
}

#[test]
fn creation_allocates_fixed_shares() {
    let (mut ledger, _) = setup_ledger(date(1, 1));
    let budget = ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();

    assert_eq!(budget.categories.transportation.budget, 200.0);
    assert_eq!(budget.categories.food.budget, 400.0);
    assert_eq!(budget.categories.transit.allocation.budget, 100.0);
    assert_eq!(budget.added_money, 0.0);
    assert!(budget.transactions.is_empty());
}

#[test]
fn expenses_update_categories_and_daily_spending() {
    let ledger = seeded();
    let budget = ledger.active_budget().unwrap();

    assert_eq!(budget.categories.food.spent, 60.0);
    assert_eq!(budget.categories.transit.allocation.spent, 20.0);
    assert_eq!(budget.categories.transit.saved, 40.0);
    assert_eq!(budget.categories.transit.trips, 1);

    let daily = ledger.daily_spending(date(1, 5));
    assert_eq!(daily.total, 80.0);
    assert_eq!(daily.transactions.len(), 2);
    let categories: Vec<_> = daily.by_category.iter().map(|entry| entry.category).collect();
    assert_eq!(categories, vec![Category::Food, Category::Transit]);

    assert!(ledger.daily_spending(date(1, 6)).is_empty());
}

#[test]
fn summary_and_breakdown_agree() {
    let ledger = seeded();
    let summary = ledger.budget_summary().unwrap();
    let breakdown = ledger.category_breakdown();

    let spent: f64 = breakdown.iter().map(|entry| entry.spent).sum();
    assert_eq!(summary.total_spent, spent);
    assert_eq!(summary.remaining, 920.0);

    let share: f64 = breakdown.iter().map(|entry| entry.percentage).sum();
    assert!((share - 100.0).abs() < 1e-9);
    assert_eq!(ledger.biggest_expense().unwrap().category, Category::Food);

    let chart = ledger.spending_chart();
    assert_eq!(chart.slices.len(), 3);
    assert_eq!(chart.slices[1].percentage, 75);
}

#[test]
fn recent_transactions_are_bounded_and_read_only() {
    let (mut ledger, _) = setup_ledger(date(1, 10));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    for day in 1..=7 {
        ledger
            .add_expense(5.0, Category::Food, &format!("Snack {day}"), date(1, day), false)
            .unwrap();
    }
    let before: Vec<_> = ledger
        .active_budget()
        .unwrap()
        .transactions
        .iter()
        .map(|txn| txn.id)
        .collect();

    let recent = ledger.recent_transactions(5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].description, "Snack 7");
    assert_eq!(recent[4].description, "Snack 3");

    let after: Vec<_> = ledger
        .active_budget()
        .unwrap()
        .transactions
        .iter()
        .map(|txn| txn.id)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn deleting_an_expense_restores_counters() {
    let (mut ledger, _) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    let before = ledger.active_budget().unwrap().categories.clone();

    let fare = ledger
        .add_expense(100.0, Category::Transit, "Ride", date(1, 5), true)
        .unwrap()
        .unwrap();
    assert_eq!(fare.amount, 50.0);
    assert_eq!(fare.saved_amount, 100.0);

    assert!(ledger.delete_transaction(fare.id).unwrap());
    let budget = ledger.active_budget().unwrap();
    assert_eq!(budget.categories, before);
    assert!(budget.transactions.is_empty());
    assert!(!ledger.delete_transaction(fare.id).unwrap());
}

#[test]
fn income_raises_total_without_touching_allocations() {
    let (mut ledger, _) = setup_ledger(date(1, 5));
    ledger
        .create_budget("Test", date(1, 1), date(1, 31), 1000.0)
        .unwrap();
    assert!(ledger.add_money(500.0, None).unwrap());

    let budget = ledger.active_budget().unwrap();
    assert_eq!(budget.total_budget, 1500.0);
    assert_eq!(budget.added_money, 500.0);
    assert_eq!(budget.categories.food.budget, 400.0);
    assert_eq!(budget.transactions[0].description, "Added money");
    assert_eq!(budget.transactions[0].date, date(1, 5));
}

#[test]
fn ending_a_budget_archives_savings() {
    let mut ledger = seeded();
    let archived = ledger.end_current_budget().unwrap().unwrap();

    assert_eq!(archived.savings, 920.0);
    assert_eq!(archived.budget.end_date, date(1, 5));
    assert!(ledger.active_budget().is_none());
    assert_eq!(ledger.archive()[0].name(), "Test");
    assert!(ledger.end_current_budget().unwrap().is_none());
}
