use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures ledger, persistence, and input failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Rejected input; the ledger is left unchanged.
    #[error("invalid transaction: {0}")]
    Validation(String),
    /// The persisted file exists but does not hold valid transaction data.
    /// Fatal to startup so user data is never silently discarded.
    #[error("ledger file `{}` is corrupt: {detail}", .path.display())]
    CorruptData { path: PathBuf, detail: String },
    /// Read or write failure; the in-memory ledger is preserved.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
