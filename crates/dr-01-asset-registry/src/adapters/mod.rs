//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `ledger`: in-memory and file-backed versioned ledgers
//! - `codec`: JSON record encoding with the fixed wire field names
//! - `identity`: caller identity taken from the invocation envelope
//! - `time`: system and manual clocks

pub mod codec;
pub mod identity;
pub mod ledger;
pub mod time;

pub use codec::JsonRecordSerializer;
pub use identity::StaticIdentity;
pub use ledger::{FileBackedLedger, InMemoryLedger, SnapshotCursor, TxIdSource};
pub use time::{ManualClock, SystemTimeSource};
