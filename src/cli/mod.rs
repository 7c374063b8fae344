//! Interactive shell over the tracker. Renders the dashboard and wires the
//! add-transaction form; all state changes go through [`Tracker`].

pub mod output;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use thiserror::Error;

use crate::config::ConfigManager;
use crate::core::Tracker;
use crate::errors::LedgerError;
use crate::ledger::TransactionKind;
use crate::storage::JsonStore;

const RECENT_LIMIT: usize = 10;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub fn run_cli() -> Result<(), CliError> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let data_file = manager.resolve_data_file(&config);
    let mut tracker = Tracker::open(Box::new(JsonStore::new(data_file)))?;
    output::info(format!("Ledger file: {}", tracker.data_path().display()));

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("fintrack")
            .items(&[
                "Dashboard",
                "Add transaction",
                "Recent transactions",
                "Quit",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => show_dashboard(&tracker),
            1 => add_transaction(&theme, &mut tracker)?,
            2 => show_recent(&tracker),
            _ => break,
        }
    }
    Ok(())
}

fn show_dashboard(tracker: &Tracker) {
    let totals = tracker.totals();
    output::header("Dashboard");
    output::info(format!("Balance   {:>12.2}", tracker.balance()));
    output::info(format!("Income    {:>12.2}", totals.income));
    output::info(format!("Expenses  {:>12.2}", totals.expense));

    let breakdown = tracker.category_breakdown();
    let mut expenses: Vec<(&str, f64)> = breakdown
        .iter()
        .filter(|(key, _)| key.0 == TransactionKind::Expense)
        .map(|(key, total)| (key.1.as_str(), *total))
        .collect();
    if expenses.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    expenses.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    output::header("Spending by category");
    for (category, total) in &expenses {
        let share = if totals.expense > 0.0 {
            total / totals.expense * 100.0
        } else {
            0.0
        };
        output::info(format!("{category:<16} {total:>10.2}  {share:>5.1}%"));
    }
}

fn add_transaction(theme: &ColorfulTheme, tracker: &mut Tracker) -> Result<(), CliError> {
    let kind = match Select::with_theme(theme)
        .with_prompt("Kind")
        .items(&["Expense", "Income"])
        .default(0)
        .interact()?
    {
        0 => TransactionKind::Expense,
        _ => TransactionKind::Income,
    };
    let amount_raw = Input::<String>::with_theme(theme)
        .with_prompt("Amount")
        .interact_text()?;
    let amount: f64 = match amount_raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            output::error("Please enter a valid amount.");
            return Ok(());
        }
    };
    let category = Input::<String>::with_theme(theme)
        .with_prompt("Category")
        .interact_text()?;
    let description = Input::<String>::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    match tracker.add_transaction(kind, amount, &category, &description) {
        Ok(txn) => output::success(format!(
            "{} of {:.2} recorded under `{}`.",
            txn.kind, txn.amount, txn.category
        )),
        Err(LedgerError::Validation(message)) => output::error(message),
        Err(err) => output::error(format!(
            "Could not save the ledger: {err}. The entry is kept for this session."
        )),
    }
    Ok(())
}

fn show_recent(tracker: &Tracker) {
    output::header("Recent transactions");
    let recent = tracker.recent(RECENT_LIMIT);
    if recent.is_empty() {
        output::info("No transactions yet.");
        return;
    }
    for txn in recent {
        let sign = match txn.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        output::info(format!(
            "{} {sign}{:>9.2}  {:<12} {}",
            txn.timestamp.format("%m/%d"),
            txn.amount,
            txn.category,
            txn.description
        ));
    }
}
