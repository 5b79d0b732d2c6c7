//! # Driving Ports (API - Inbound)
//!
//! The operation surface exposed to the invocation layer.
//!
//! | Operation | Authorization |
//! |-----------|---------------|
//! | `init_ledger` | none (bootstrap) |
//! | `create_asset` / `update_asset` / `delete_asset` | privileged identity |
//! | `read_asset` / `asset_exists` / `get_all_assets` | none |
//! | `get_asset_history` / `verify_credential` | none |

use super::outbound::IdentityProvider;
use crate::domain::credential::PlaintextPin;
use crate::domain::entities::{Asset, AssetRequest, HistoryEntry};
use crate::errors::RegistryError;

/// Primary API for the asset registry.
pub trait AssetRegistryApi: Send + Sync {
    /// Writes the fixed seed set. Returns the number of records written.
    fn init_ledger(&self) -> Result<usize, RegistryError>;

    /// Creates a record. Fails with `AlreadyExists` if the id is live.
    fn create_asset(
        &self,
        caller: &dyn IdentityProvider,
        request: AssetRequest,
    ) -> Result<(), RegistryError>;

    /// Replaces every field of a live record, re-hashing the PIN.
    fn update_asset(
        &self,
        caller: &dyn IdentityProvider,
        request: AssetRequest,
    ) -> Result<(), RegistryError>;

    /// Tombstones a live record.
    fn delete_asset(&self, caller: &dyn IdentityProvider, dealer_id: &str)
        -> Result<(), RegistryError>;

    /// Current record with the credential blanked.
    fn read_asset(&self, dealer_id: &str) -> Result<Asset, RegistryError>;

    /// True if the id currently resolves to a record.
    fn asset_exists(&self, dealer_id: &str) -> Result<bool, RegistryError>;

    /// Every live record in key order, credentials blanked.
    fn get_all_assets(&self) -> Result<Vec<Asset>, RegistryError>;

    /// Every revision of the id in commit order, tombstones included.
    ///
    /// Records keep their credential digest.
    fn get_asset_history(&self, dealer_id: &str) -> Result<Vec<HistoryEntry>, RegistryError>;

    /// True if `candidate` matches the stored credential.
    fn verify_credential(
        &self,
        dealer_id: &str,
        candidate: &PlaintextPin,
    ) -> Result<bool, RegistryError>;
}
