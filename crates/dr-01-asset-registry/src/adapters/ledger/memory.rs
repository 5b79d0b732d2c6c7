use super::cursor::SnapshotCursor;
use crate::adapters::time::SystemTimeSource;
use crate::errors::LedgerError;
use crate::ports::outbound::{
    HistoryCursor, KeyModification, KeyValue, StateCursor, TimeSource, VersionedLedger,
};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// One committed revision. `value: None` is a tombstone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Revision {
    pub(crate) tx_id: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) value: Option<Vec<u8>>,
}

/// Full revision log keyed by ledger key.
pub(crate) type RevisionLog = BTreeMap<String, Vec<Revision>>;

/// How revision transaction ids are assigned.
#[derive(Debug)]
pub enum TxIdSource {
    /// Random v4 UUIDs.
    Random,
    /// `tx-000001`, `tx-000002`, ... for reproducible tests.
    Sequential(AtomicU64),
}

impl TxIdSource {
    /// Deterministic sequence starting at 1.
    pub fn sequential() -> Self {
        Self::Sequential(AtomicU64::new(1))
    }

    fn next_id(&self) -> String {
        match self {
            Self::Random => Uuid::new_v4().simple().to_string(),
            Self::Sequential(counter) => {
                format!("tx-{:06}", counter.fetch_add(1, Ordering::SeqCst))
            }
        }
    }
}

/// In-memory versioned ledger for tests and local runs.
///
/// Keeps every revision of every key; `BTreeMap` ordering gives
/// lexicographic range scans. Each write is its own transaction.
pub struct InMemoryLedger {
    log: RwLock<RevisionLog>,
    clock: Arc<dyn TimeSource>,
    tx_ids: TxIdSource,
    open_cursors: Arc<AtomicUsize>,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    /// Empty ledger on the system clock with random tx ids.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemTimeSource))
    }

    /// Empty ledger on the given clock.
    pub fn with_clock(clock: Arc<dyn TimeSource>) -> Self {
        Self {
            log: RwLock::new(RevisionLog::new()),
            clock,
            tx_ids: TxIdSource::Random,
            open_cursors: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Use the given tx id source.
    pub fn with_tx_ids(mut self, tx_ids: TxIdSource) -> Self {
        self.tx_ids = tx_ids;
        self
    }

    pub(crate) fn from_log(log: RevisionLog, clock: Arc<dyn TimeSource>) -> Self {
        let ledger = Self::with_clock(clock);
        *ledger.log.write() = log;
        ledger
    }

    /// Number of cursors handed out and not yet closed.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of keys with at least one revision, live or not.
    pub fn key_count(&self) -> usize {
        self.log.read().len()
    }

    /// True if no key has a live value.
    pub fn is_empty(&self) -> bool {
        self.log
            .read()
            .values()
            .all(|revisions| current(revisions).is_none())
    }

    pub(crate) fn snapshot(&self) -> RevisionLog {
        self.log.read().clone()
    }

    pub(crate) fn restore(&self, log: RevisionLog) {
        *self.log.write() = log;
    }

    fn append(&self, key: &str, value: Option<Vec<u8>>) {
        let revision = Revision {
            tx_id: self.tx_ids.next_id(),
            timestamp: self.clock.now(),
            value,
        };
        self.log
            .write()
            .entry(key.to_string())
            .or_default()
            .push(revision);
    }
}

fn current(revisions: &[Revision]) -> Option<&Vec<u8>> {
    revisions.last().and_then(|rev| rev.value.as_ref())
}

fn in_range(key: &str, start: &str, end: &str) -> bool {
    (start.is_empty() || key >= start) && (end.is_empty() || key < end)
}

impl VersionedLedger for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.log.read().get(key).and_then(|r| current(r)).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.append(key, Some(value.to_vec()));
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), LedgerError> {
        // Deleting an absent key writes nothing.
        if self.get_state(key)?.is_none() {
            return Ok(());
        }
        self.append(key, None);
        Ok(())
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<StateCursor, LedgerError> {
        let items: Vec<KeyValue> = self
            .log
            .read()
            .iter()
            .filter(|(key, _)| in_range(key, start, end))
            .filter_map(|(key, revisions)| {
                current(revisions).map(|value| KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
            })
            .collect();
        Ok(Box::new(SnapshotCursor::new(
            items,
            Arc::clone(&self.open_cursors),
        )))
    }

    fn history_for_key(&self, key: &str) -> Result<HistoryCursor, LedgerError> {
        let items: Vec<KeyModification> = self
            .log
            .read()
            .get(key)
            .map(|revisions| {
                revisions
                    .iter()
                    .map(|rev| KeyModification {
                        tx_id: rev.tx_id.clone(),
                        value: rev.value.clone().unwrap_or_default(),
                        timestamp: rev.timestamp,
                        is_delete: rev.value.is_none(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(Box::new(SnapshotCursor::new(
            items,
            Arc::clone(&self.open_cursors),
        )))
    }
}
