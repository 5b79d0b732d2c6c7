//! # Asset Registry API Implementation
//!
//! Per-key lifecycle: ABSENT --Create--> LIVE --Update--> LIVE --Delete--> ABSENT.
//!
//! Create checks uniqueness by reading before writing; two concurrent
//! creates of the same id are serialized by the ledger, not here.

use super::AssetRegistryService;
use crate::domain::credential::{verify_pin, PlaintextPin};
use crate::domain::entities::{Asset, AssetRequest, HistoryEntry};
use crate::errors::RegistryError;
use crate::genesis;
use crate::ports::inbound::AssetRegistryApi;
use crate::ports::outbound::{IdentityProvider, RecordSerializer, VersionedLedger};
use tracing::{debug, info, instrument};

impl<L, S> AssetRegistryApi for AssetRegistryService<L, S>
where
    L: VersionedLedger,
    S: RecordSerializer,
{
    #[instrument(name = "InitLedger", skip(self))]
    fn init_ledger(&self) -> Result<usize, RegistryError> {
        let seed = genesis::seed_assets()?;
        for asset in &seed {
            self.store.put("InitLedger", asset)?;
        }
        info!(count = seed.len(), "[dr-01] genesis records written");
        Ok(seed.len())
    }

    #[instrument(name = "CreateAsset", skip_all, fields(dealer_id = %request.dealer_id))]
    fn create_asset(
        &self,
        caller: &dyn IdentityProvider,
        request: AssetRequest,
    ) -> Result<(), RegistryError> {
        const OP: &str = "CreateAsset";
        self.authorize(caller, OP, &request.dealer_id)?;

        let id = Self::parse_id(OP, &request.dealer_id)?;
        if self.store.exists(&id)? {
            return Err(RegistryError::AlreadyExists {
                operation: OP,
                dealer_id: id.to_string(),
            });
        }

        let asset = request
            .into_asset()
            .map_err(|e| e.with_context(OP, id.as_str()))?;
        self.store.put(OP, &asset)?;
        info!(status = %asset.status, "[dr-01] asset created");
        Ok(())
    }

    #[instrument(name = "UpdateAsset", skip_all, fields(dealer_id = %request.dealer_id))]
    fn update_asset(
        &self,
        caller: &dyn IdentityProvider,
        request: AssetRequest,
    ) -> Result<(), RegistryError> {
        const OP: &str = "UpdateAsset";
        self.authorize(caller, OP, &request.dealer_id)?;

        let id = Self::parse_id(OP, &request.dealer_id)?;
        let current = self.store.get(OP, &id)?;

        let replacement = request
            .into_asset()
            .map_err(|e| e.with_context(OP, id.as_str()))?;
        self.transitions
            .check(current.status, replacement.status)
            .map_err(|e| e.with_context(OP, id.as_str()))?;
        self.store.put(OP, &replacement)?;
        info!(
            from = %current.status,
            to = %replacement.status,
            "[dr-01] asset updated"
        );
        Ok(())
    }

    #[instrument(name = "DeleteAsset", skip(self, caller))]
    fn delete_asset(
        &self,
        caller: &dyn IdentityProvider,
        dealer_id: &str,
    ) -> Result<(), RegistryError> {
        const OP: &str = "DeleteAsset";
        self.authorize(caller, OP, dealer_id)?;

        let id = Self::parse_id(OP, dealer_id)?;
        if !self.store.exists(&id)? {
            return Err(RegistryError::NotFound {
                operation: OP,
                dealer_id: id.to_string(),
            });
        }
        self.store.delete(&id)?;
        info!("[dr-01] asset deleted");
        Ok(())
    }

    #[instrument(name = "ReadAsset", skip(self))]
    fn read_asset(&self, dealer_id: &str) -> Result<Asset, RegistryError> {
        let id = Self::parse_id("ReadAsset", dealer_id)?;
        let asset = self.store.get("ReadAsset", &id)?.redacted();
        debug!("[dr-01] asset read");
        Ok(asset)
    }

    #[instrument(name = "AssetExists", skip(self))]
    fn asset_exists(&self, dealer_id: &str) -> Result<bool, RegistryError> {
        let id = Self::parse_id("AssetExists", dealer_id)?;
        self.store.exists(&id)
    }

    #[instrument(name = "GetAllAssets", skip(self))]
    fn get_all_assets(&self) -> Result<Vec<Asset>, RegistryError> {
        self.list_all()
    }

    #[instrument(name = "GetAssetHistory", skip(self))]
    fn get_asset_history(&self, dealer_id: &str) -> Result<Vec<HistoryEntry>, RegistryError> {
        let id = Self::parse_id("GetAssetHistory", dealer_id)?;
        self.history(&id)
    }

    #[instrument(name = "VerifyMPIN", skip(self, candidate))]
    fn verify_credential(
        &self,
        dealer_id: &str,
        candidate: &PlaintextPin,
    ) -> Result<bool, RegistryError> {
        let id = Self::parse_id("VerifyMPIN", dealer_id)?;
        let asset = self.store.get("VerifyMPIN", &id)?;
        let matched = verify_pin(candidate, &asset.credential);
        debug!(matched, "[dr-01] credential checked");
        Ok(matched)
    }
}
