//! Facade that coordinates ledger state and write-through persistence.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::errors::Result;
use crate::ledger::{Ledger, Totals, Transaction, TransactionKind};
use crate::storage::StorageBackend;

/// Owns the in-memory ledger for the lifetime of the program and keeps it
/// synchronized with the storage backend after every mutation.
///
/// The presentation layer receives a reference to this object at startup and
/// never touches the persisted file directly.
pub struct Tracker {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("ledger", &self.ledger)
            .field("storage_path", &self.storage.path())
            .finish()
    }
}

impl Tracker {
    /// Loads the persisted ledger, or starts empty on first run.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = storage.load()?;
        info!(
            path = %storage.path().display(),
            transactions = ledger.transaction_count(),
            "ledger loaded"
        );
        Ok(Self { ledger, storage })
    }

    /// Validates and records a new transaction, then flushes the ledger to
    /// disk. Returns the created record.
    ///
    /// A failed save is surfaced as an error, but the record stays in memory
    /// so nothing is lost for the current session; the next successful save
    /// persists it.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<Transaction> {
        let txn = self.ledger.append(kind, amount, category, description)?;
        if let Err(err) = self.storage.save(&self.ledger) {
            warn!(id = txn.id, "save failed, transaction kept in memory: {err}");
            return Err(err);
        }
        info!(id = txn.id, kind = %txn.kind, amount = txn.amount, "transaction recorded");
        Ok(txn)
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn category_breakdown(&self) -> HashMap<(TransactionKind, String), f64> {
        self.ledger.category_breakdown()
    }

    /// The last `n` transactions, most recent first.
    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        self.ledger.recent(n)
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.transaction_count()
    }

    pub fn data_path(&self) -> &Path {
        self.storage.path()
    }
}
