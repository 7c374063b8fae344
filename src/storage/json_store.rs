//! JSON file persistence for the transaction ledger.
//!
//! The wire format is a single JSON array of transaction objects. Writes are
//! staged to a temporary sibling and renamed into place, so a failed write
//! never truncates the previous good file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{LedgerError, Result},
    ledger::{Ledger, Transaction},
};

use super::StorageBackend;

/// Stores one ledger as a JSON array at a fixed path.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for JsonStore {
    fn load(&self) -> Result<Ledger> {
        load_ledger_from_path(&self.path)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads a ledger snapshot from disk. A missing file is a first run and
/// yields an empty ledger; unparsable contents are fatal so partially read
/// data never replaces the user's history.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        return Ok(Ledger::new());
    }
    let data = fs::read_to_string(path)?;
    let transactions: Vec<Transaction> =
        serde_json::from_str(&data).map_err(|err| LedgerError::CorruptData {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;
    Ledger::from_transactions(transactions).map_err(|err| match err {
        LedgerError::Validation(detail) => LedgerError::CorruptData {
            path: path.to_path_buf(),
            detail,
        },
        other => other,
    })
}

/// Writes the full transaction sequence to disk atomically by staging to a
/// temporary file.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(ledger.transactions())
        .map_err(|err| LedgerError::Io(std::io::Error::other(err)))?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
