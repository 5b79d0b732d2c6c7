//! # Record Store
//!
//! Typed access to dealer records on top of the versioned ledger.
//!
//! Translates between `Asset` values and stored bytes, turns ledger
//! failures into `RegistryError::Storage` and closes every ledger cursor
//! on every exit path.

use crate::domain::entities::{Asset, HistoryEntry};
use crate::domain::value_objects::DealerId;
use crate::errors::{LedgerError, RegistryError};
use crate::ports::outbound::{LedgerCursor, RecordSerializer, VersionedLedger};
use tracing::trace;

/// Closes the wrapped cursor when dropped.
struct CursorGuard<T> {
    cursor: Box<dyn LedgerCursor<T>>,
}

impl<T> CursorGuard<T> {
    fn new(cursor: Box<dyn LedgerCursor<T>>) -> Self {
        Self { cursor }
    }
}

impl<T> Iterator for CursorGuard<T> {
    type Item = Result<T, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_entry()
    }
}

impl<T> Drop for CursorGuard<T> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}

/// Dealer records over a [`VersionedLedger`].
pub struct RecordStore<L, S> {
    ledger: L,
    serializer: S,
}

impl<L, S> RecordStore<L, S>
where
    L: VersionedLedger,
    S: RecordSerializer,
{
    pub fn new(ledger: L, serializer: S) -> Self {
        Self { ledger, serializer }
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// True if the id currently resolves to a value.
    pub fn exists(&self, id: &DealerId) -> Result<bool, RegistryError> {
        let value = self
            .ledger
            .get_state(id.as_str())
            .map_err(|e| RegistryError::storage("get_state", id.as_str(), e))?;
        Ok(value.is_some())
    }

    /// Current record, `NotFound` if absent.
    pub fn get(&self, operation: &'static str, id: &DealerId) -> Result<Asset, RegistryError> {
        let bytes = self
            .ledger
            .get_state(id.as_str())
            .map_err(|e| RegistryError::storage("get_state", id.as_str(), e))?
            .ok_or_else(|| RegistryError::NotFound {
                operation,
                dealer_id: id.to_string(),
            })?;
        self.decode(operation, id.as_str(), &bytes)
    }

    /// Writes a new revision of the record under its own id.
    pub fn put(&self, operation: &'static str, asset: &Asset) -> Result<(), RegistryError> {
        let key = asset.dealer_id.as_str();
        let bytes = self
            .serializer
            .encode(asset)
            .map_err(|e| RegistryError::Encode {
                operation,
                dealer_id: key.to_string(),
                reason: e.to_string(),
            })?;
        self.ledger
            .put_state(key, &bytes)
            .map_err(|e| RegistryError::storage("put_state", key, e))?;
        trace!(dealer_id = key, bytes = bytes.len(), "[dr-01] record written");
        Ok(())
    }

    /// Tombstones the id.
    pub fn delete(&self, id: &DealerId) -> Result<(), RegistryError> {
        self.ledger
            .del_state(id.as_str())
            .map_err(|e| RegistryError::storage("del_state", id.as_str(), e))
    }

    /// Every live record in key order.
    ///
    /// Stops at the first undecodable value or ledger failure.
    pub fn scan_all(&self, operation: &'static str) -> Result<Vec<Asset>, RegistryError> {
        let cursor = self
            .ledger
            .state_by_range("", "")
            .map_err(|e| RegistryError::storage("state_by_range", "", e))?;

        let mut assets = Vec::new();
        for item in CursorGuard::new(cursor) {
            let kv = item.map_err(|e| RegistryError::storage("state_by_range", "", e))?;
            assets.push(self.decode(operation, &kv.key, &kv.value)?);
        }
        Ok(assets)
    }

    /// Every revision of the id in commit order.
    pub fn history(
        &self,
        operation: &'static str,
        id: &DealerId,
    ) -> Result<Vec<HistoryEntry>, RegistryError> {
        let key = id.as_str();
        let cursor = self
            .ledger
            .history_for_key(key)
            .map_err(|e| RegistryError::storage("history_for_key", key, e))?;

        let mut entries = Vec::new();
        for item in CursorGuard::new(cursor) {
            let modification =
                item.map_err(|e| RegistryError::storage("history_for_key", key, e))?;
            let record = if modification.is_delete {
                None
            } else {
                Some(self.decode(operation, key, &modification.value)?)
            };
            entries.push(HistoryEntry {
                record,
                tx_id: modification.tx_id,
                timestamp: modification.timestamp,
                is_delete: modification.is_delete,
            });
        }
        Ok(entries)
    }

    fn decode(
        &self,
        operation: &'static str,
        key: &str,
        bytes: &[u8],
    ) -> Result<Asset, RegistryError> {
        self.serializer
            .decode(bytes)
            .map_err(|e| RegistryError::Decode {
                operation,
                dealer_id: key.to_string(),
                reason: e.to_string(),
            })
    }
}
