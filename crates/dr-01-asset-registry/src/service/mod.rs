//! # Asset Registry Service
//!
//! The main service implementing the Asset Registry API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `AssetRegistryApi` for lifecycle and query operations
//! 2. Gates every mutation on the caller's organization
//! 3. Applies the configured status transition table on Update
//! 4. Uses dependency injection for the ledger and record encoding

mod lifecycle;
mod queries;
mod store;

pub use store::RecordStore;

use crate::adapters::{InMemoryLedger, JsonRecordSerializer};
use crate::config::RegistryConfig;
use crate::domain::identity::IdentityGate;
use crate::domain::status::StatusTransitionTable;
use crate::domain::value_objects::DealerId;
use crate::errors::RegistryError;
use crate::ports::outbound::{IdentityProvider, RecordSerializer, VersionedLedger};
use tracing::warn;

/// The Asset Registry Service.
pub struct AssetRegistryService<L, S>
where
    L: VersionedLedger,
    S: RecordSerializer,
{
    /// Typed record access over the ledger.
    pub(crate) store: RecordStore<L, S>,
    /// Privileged-identity rule for mutations.
    pub(crate) gate: IdentityGate,
    /// Status changes permitted on Update.
    pub(crate) transitions: StatusTransitionTable,
}

/// Dependencies for AssetRegistryService
pub struct RegistryDependencies<L, S> {
    pub ledger: L,
    pub serializer: S,
}

impl<L, S> AssetRegistryService<L, S>
where
    L: VersionedLedger,
    S: RecordSerializer,
{
    /// Create a new Asset Registry Service with the given dependencies.
    pub fn new(deps: RegistryDependencies<L, S>, config: RegistryConfig) -> Self {
        Self {
            store: RecordStore::new(deps.ledger, deps.serializer),
            gate: IdentityGate::new(&config.gate),
            transitions: config.status_transitions,
        }
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &L {
        self.store.ledger()
    }

    /// Resolves the caller and checks it against the gate.
    pub(crate) fn authorize(
        &self,
        caller: &dyn IdentityProvider,
        operation: &'static str,
        dealer_id: &str,
    ) -> Result<(), RegistryError> {
        let msp_id = caller
            .caller_msp_id()
            .map_err(|e| e.with_context(operation, dealer_id))
            .inspect_err(|e| {
                warn!(operation, error = %e, "[dr-01] caller identity unresolved");
            })?;
        self.gate.check(&msp_id, operation, dealer_id).inspect_err(|_| {
            warn!(
                operation,
                msp_id = %msp_id,
                privileged = self.gate.privileged_identity(),
                "[dr-01] rejected unprivileged caller"
            );
        })
    }

    /// Parses a caller-supplied id, tagging failures with the operation.
    pub(crate) fn parse_id(
        operation: &'static str,
        raw: &str,
    ) -> Result<DealerId, RegistryError> {
        DealerId::parse(raw).map_err(|e| e.with_context(operation, raw))
    }
}

impl AssetRegistryService<InMemoryLedger, JsonRecordSerializer> {
    /// Service over a fresh in-memory ledger.
    pub fn new_in_memory(config: RegistryConfig) -> Self {
        Self::new(
            RegistryDependencies {
                ledger: InMemoryLedger::new(),
                serializer: JsonRecordSerializer,
            },
            config,
        )
    }
}
