pub mod json_store;

use std::path::Path;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over persistence backends capable of storing a ledger.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn path(&self) -> &Path;
}

pub use json_store::JsonStore;
