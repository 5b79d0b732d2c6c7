//! Ledger Adapters
//!
//! Implementations of the `VersionedLedger` trait.

mod cursor;
mod file;
mod memory;

pub use cursor::SnapshotCursor;
pub use file::FileBackedLedger;
pub use memory::{InMemoryLedger, TxIdSource};
