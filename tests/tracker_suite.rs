mod common;

use fintrack::errors::LedgerError;
use fintrack::ledger::TransactionKind;

#[test]
fn dashboard_scenario_matches_expected_aggregates() {
    let (mut tracker, _guard) = common::setup_tracker();
    tracker
        .add_transaction(TransactionKind::Income, 1000.0, "salary", "monthly pay")
        .expect("record salary");
    tracker
        .add_transaction(TransactionKind::Income, 200.0, "freelance", "side project")
        .expect("record freelance");
    tracker
        .add_transaction(TransactionKind::Expense, 150.0, "food", "groceries")
        .expect("record groceries");

    assert_eq!(tracker.balance(), 1050.0);
    let totals = tracker.totals();
    assert_eq!(totals.income, 1200.0);
    assert_eq!(totals.expense, 150.0);

    let breakdown = tracker.category_breakdown();
    assert_eq!(breakdown.len(), 3);
    assert_eq!(
        breakdown.get(&(TransactionKind::Income, "salary".into())),
        Some(&1000.0)
    );
    assert_eq!(
        breakdown.get(&(TransactionKind::Income, "freelance".into())),
        Some(&200.0)
    );
    assert_eq!(
        breakdown.get(&(TransactionKind::Expense, "food".into())),
        Some(&150.0)
    );
}

#[test]
fn balance_matches_independent_recomputation() {
    let (mut tracker, _guard) = common::setup_tracker();
    let entries = [
        (TransactionKind::Income, 1234.56, "salary"),
        (TransactionKind::Expense, 78.9, "food"),
        (TransactionKind::Expense, 12.34, "transport"),
        (TransactionKind::Income, 0.01, "interest"),
        (TransactionKind::Expense, 600.0, "rent"),
    ];
    let mut expected = 0.0_f64;
    for (kind, amount, category) in entries {
        tracker
            .add_transaction(kind, amount, category, "")
            .expect("record entry");
        expected += match kind {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        };
    }
    assert!((tracker.balance() - expected).abs() < 1e-9);
}

#[test]
fn invalid_amount_is_rejected_and_count_unchanged() {
    let (mut tracker, _guard) = common::setup_tracker();
    tracker
        .add_transaction(TransactionKind::Income, 50.0, "salary", "")
        .expect("record valid entry");

    for amount in [0.0, -1.0] {
        let err = tracker
            .add_transaction(TransactionKind::Expense, amount, "food", "")
            .expect_err("non-positive amount must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }
    assert_eq!(tracker.transaction_count(), 1);
}

#[test]
fn breakdown_sums_reconcile_with_totals() {
    let (mut tracker, _guard) = common::setup_tracker();
    let entries = [
        (TransactionKind::Income, 900.0, "salary"),
        (TransactionKind::Income, 100.0, "salary"),
        (TransactionKind::Expense, 40.0, "food"),
        (TransactionKind::Expense, 60.0, "food"),
        (TransactionKind::Expense, 25.0, "transport"),
    ];
    for (kind, amount, category) in entries {
        tracker
            .add_transaction(kind, amount, category, "")
            .expect("record entry");
    }

    let totals = tracker.totals();
    let breakdown = tracker.category_breakdown();
    let income_sum: f64 = breakdown
        .iter()
        .filter(|((kind, _), _)| *kind == TransactionKind::Income)
        .map(|(_, amount)| amount)
        .sum();
    let expense_sum: f64 = breakdown
        .iter()
        .filter(|((kind, _), _)| *kind == TransactionKind::Expense)
        .map(|(_, amount)| amount)
        .sum();
    assert_eq!(income_sum, totals.income);
    assert_eq!(expense_sum, totals.expense);
    assert_eq!(
        breakdown.get(&(TransactionKind::Expense, "food".into())),
        Some(&100.0),
        "repeated categories must sum without double-counting"
    );
}

#[test]
fn recent_history_is_bounded_and_newest_first() {
    let (mut tracker, _guard) = common::setup_tracker();
    for i in 1..=5 {
        tracker
            .add_transaction(TransactionKind::Expense, i as f64, "misc", "")
            .expect("record entry");
    }

    let recent = tracker.recent(3);
    assert_eq!(recent.len(), 3);
    let ids: Vec<u64> = recent.iter().map(|txn| txn.id).collect();
    assert_eq!(ids, vec![5, 4, 3]);

    let all = tracker.recent(100);
    assert_eq!(all.len(), 5, "n beyond the count returns everything");
    let mut seen = std::collections::HashSet::new();
    assert!(
        all.iter().all(|txn| seen.insert(txn.id)),
        "no transaction may appear twice"
    );
}
