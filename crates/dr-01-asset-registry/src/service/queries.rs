//! Bulk and audit queries.

use super::AssetRegistryService;
use crate::domain::entities::{Asset, HistoryEntry};
use crate::domain::invariants::check_history_invariants;
use crate::domain::value_objects::DealerId;
use crate::errors::RegistryError;
use crate::ports::outbound::{RecordSerializer, VersionedLedger};
use tracing::{debug, error};

impl<L, S> AssetRegistryService<L, S>
where
    L: VersionedLedger,
    S: RecordSerializer,
{
    /// Every live record in key order with credentials blanked.
    pub(crate) fn list_all(&self) -> Result<Vec<Asset>, RegistryError> {
        let assets: Vec<Asset> = self
            .store
            .scan_all("GetAllAssets")?
            .into_iter()
            .map(Asset::redacted)
            .collect();
        debug!(count = assets.len(), "[dr-01] listed assets");
        Ok(assets)
    }

    /// Full revision sequence of a key, `NotFound` if it was never written.
    ///
    /// A deleted key keeps its history. Records are returned as committed,
    /// credential digest included.
    pub(crate) fn history(&self, id: &DealerId) -> Result<Vec<HistoryEntry>, RegistryError> {
        let entries = self.store.history("GetAssetHistory", id)?;
        if entries.is_empty() {
            return Err(RegistryError::NotFound {
                operation: "GetAssetHistory",
                dealer_id: id.to_string(),
            });
        }

        let violations = check_history_invariants(id, &entries);
        if !violations.is_empty() {
            error!(?violations, "[dr-01] ledger history violates invariants");
        }

        debug!(revisions = entries.len(), "[dr-01] history read");
        Ok(entries)
    }
}
