//! # Asset Registry (dr-01)
//!
//! Dealer account registry on a permissioned, versioned ledger. Each record
//! is keyed by dealer id and holds contact number, PIN digest, balance,
//! account status and the last transaction's amount, type and remarks.
//!
//! ## Architecture
//!
//! ```text
//! Invocation ──> AssetRegistryApi ──> IdentityGate (mutations only)
//!                      │
//!                      ├──> StatusTransitionTable (Update)
//!                      ↓
//!                 RecordStore ──> RecordSerializer
//!                      │
//!                      ↓
//!                VersionedLedger (state + history)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Digest Only | The ledger never holds a plaintext PIN |
//! | 2 | Redacted Reads | Read and GetAllAssets blank the `MPIN` field |
//! | 3 | Gated Mutations | Create/Update/Delete require the privileged organization |
//! | 4 | Unique Create | Create fails on a live id; nothing is overwritten |
//! | 5 | Ordered History | History is in commit order; tombstones carry no record |
//! | 6 | Closed Cursors | Every ledger cursor is closed on every exit path |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (record, credential, identity, status rules)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `service/` - Application service implementing the API
//! - `adapters/` - Ledgers, codec, identity and clocks
//! - `genesis` - Seed accounts written by `InitLedger`
//!
//! ## Usage
//!
//! ```ignore
//! use dr_01_asset_registry::{AssetRegistryApi, AssetRegistryService, RegistryConfig};
//! use dr_01_asset_registry::adapters::StaticIdentity;
//!
//! let service = AssetRegistryService::new_in_memory(RegistryConfig::default());
//! service.init_ledger()?;
//!
//! let caller = StaticIdentity::new("Org1MSP");
//! service.delete_asset(&caller, "DLR004")?;
//! let remaining = service.get_all_assets()?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod genesis;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_utils;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem identifier used in log prefixes.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Asset Registry";

// Re-export key types for convenience
pub use config::{GateConfig, RegistryConfig, DEFAULT_PRIVILEGED_IDENTITY};
pub use domain::credential::{hash_pin, verify_pin, CredentialDigest, PlaintextPin};
pub use domain::entities::{Asset, AssetRequest, HistoryEntry};
pub use domain::status::StatusTransitionTable;
pub use domain::value_objects::{AccountStatus, DealerId, TransactionType};
pub use errors::{CodecError, ErrorContext, LedgerError, RegistryError};
pub use ports::inbound::AssetRegistryApi;
pub use ports::outbound::{IdentityProvider, RecordSerializer, TimeSource, VersionedLedger};
pub use service::{AssetRegistryService, RegistryDependencies};

/// Prelude for hosts embedding the registry.
pub mod prelude {
    pub use crate::adapters::{FileBackedLedger, InMemoryLedger, JsonRecordSerializer, StaticIdentity};
    pub use crate::{
        AccountStatus, Asset, AssetRegistryApi, AssetRegistryService, AssetRequest, HistoryEntry,
        PlaintextPin, RegistryConfig, RegistryDependencies, RegistryError, StatusTransitionTable,
    };
}
