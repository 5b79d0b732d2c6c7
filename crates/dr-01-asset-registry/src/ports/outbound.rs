//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the registry depends on:
//! - The versioned ledger (state, range scans, per-key history)
//! - The caller identity carried by the invocation context
//! - Record serialization
//! - Wall-clock time for ledger adapters
//!
//! All ports are synchronous. A call blocks until the ledger answers; the
//! registry never suspends between reads and writes of one invocation.

use crate::domain::entities::Asset;
use crate::errors::{CodecError, LedgerError, RegistryError};
use chrono::{DateTime, Utc};

// =============================================================================
// VERSIONED LEDGER
// =============================================================================

/// Current value of one live key, as yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

/// One committed revision of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Transaction that wrote the revision.
    pub tx_id: String,
    /// Written bytes; empty for a tombstone.
    pub value: Vec<u8>,
    /// Commit time.
    pub timestamp: DateTime<Utc>,
    /// True if this revision deleted the key.
    pub is_delete: bool,
}

/// Single-pass cursor over ledger results.
///
/// Cursors hold backend resources until [`LedgerCursor::close`] is called.
/// Closing twice is harmless.
pub trait LedgerCursor<T>: Send {
    /// Next item, `None` when exhausted.
    fn next_entry(&mut self) -> Option<Result<T, LedgerError>>;

    /// Releases the cursor.
    fn close(&mut self);
}

/// Cursor over live keys.
pub type StateCursor = Box<dyn LedgerCursor<KeyValue>>;

/// Cursor over one key's revisions.
pub type HistoryCursor = Box<dyn LedgerCursor<KeyModification>>;

/// Append-only, versioned key-value store of record.
///
/// Production: the peer's world state and history database.
/// Testing: `InMemoryLedger`, `FileBackedLedger`.
///
/// Every write appends a revision; nothing is overwritten. Atomicity of an
/// invocation's writes and ordering against concurrent invocations are the
/// backend's responsibility.
pub trait VersionedLedger: Send + Sync {
    /// Current value of `key`, `None` if absent or tombstoned.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Appends a revision holding `value`.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Appends a tombstone revision.
    fn del_state(&self, key: &str) -> Result<(), LedgerError>;

    /// Live keys in `[start, end)` in lexicographic order.
    ///
    /// An empty bound is open on that side.
    fn state_by_range(&self, start: &str, end: &str) -> Result<StateCursor, LedgerError>;

    /// All revisions of `key` in commit order, tombstones included.
    fn history_for_key(&self, key: &str) -> Result<HistoryCursor, LedgerError>;
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Caller identity extracted from the invocation context.
pub trait IdentityProvider {
    /// Organization (MSP ID) of the caller.
    ///
    /// Fails with `IdentityResolution` if the context carries no usable
    /// identity.
    fn caller_msp_id(&self) -> Result<String, RegistryError>;
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Record encoding used on the ledger.
pub trait RecordSerializer: Send + Sync {
    /// Record to stored bytes.
    fn encode(&self, asset: &Asset) -> Result<Vec<u8>, CodecError>;

    /// Stored bytes to record.
    fn decode(&self, bytes: &[u8]) -> Result<Asset, CodecError>;
}

// =============================================================================
// TIME
// =============================================================================

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current commit time.
    fn now(&self) -> DateTime<Utc>;
}
