pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, Totals};
pub use transaction::{Transaction, TransactionKind};
