use fintrack::{core::Tracker, storage::JsonStore};
use tempfile::TempDir;

/// Creates a tracker backed by a unique temporary data file. The returned
/// guard keeps the directory alive for the duration of the test.
pub fn setup_tracker() -> (Tracker, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(temp.path().join("finance_data.json"));
    let tracker = Tracker::open(Box::new(store)).expect("open tracker");
    (tracker, temp)
}
