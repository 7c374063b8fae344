//! The transaction ledger and its derived aggregates.

use std::collections::{HashMap, HashSet};

use crate::errors::{LedgerError, Result};

use super::transaction::{Transaction, TransactionKind};

/// Income and expense sums over the full transaction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Ordered, append-only collection of a user's recorded transactions.
///
/// Insertion order is chronological order. Identifiers are assigned from a
/// monotonic counter, so they stay unique across the sequence; the counter
/// resumes from the highest persisted id after a reload.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from a persisted transaction sequence, re-checking
    /// the invariants the file format cannot express.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        let mut seen = HashSet::new();
        for txn in &transactions {
            if !txn.amount.is_finite() || txn.amount <= 0.0 {
                return Err(LedgerError::Validation(format!(
                    "transaction {} has non-positive amount {}",
                    txn.id, txn.amount
                )));
            }
            if !seen.insert(txn.id) {
                return Err(LedgerError::Validation(format!(
                    "duplicate transaction id {}",
                    txn.id
                )));
            }
        }
        let next_id = transactions.iter().map(|txn| txn.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            transactions,
            next_id,
        })
    }

    /// Validates and appends a new transaction, returning the created record.
    /// On rejection the sequence is left untouched.
    pub fn append(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return Err(LedgerError::Validation("category must not be empty".into()));
        }
        let txn = Transaction::new(
            self.next_id,
            kind,
            amount,
            category,
            description.trim().to_string(),
        );
        self.next_id += 1;
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of signed amounts over the full sequence.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn totals(&self) -> Totals {
        self.transactions
            .iter()
            .fold(Totals::default(), |mut totals, txn| {
                match txn.kind {
                    TransactionKind::Income => totals.income += txn.amount,
                    TransactionKind::Expense => totals.expense += txn.amount,
                }
                totals
            })
    }

    /// Summed amounts grouped by kind and category. Iteration order of the
    /// result is unspecified.
    pub fn category_breakdown(&self) -> HashMap<(TransactionKind, String), f64> {
        let mut breakdown = HashMap::new();
        for txn in &self.transactions {
            *breakdown
                .entry((txn.kind, txn.category.clone()))
                .or_insert(0.0) += txn.amount;
        }
        breakdown
    }

    /// The last `n` transactions by timestamp, most recent first. Timestamp
    /// ties fall back to the id so the ordering is deterministic.
    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = self.transactions.iter().collect();
        ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        ordered.truncate(n);
        ordered
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
