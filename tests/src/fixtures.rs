//! # Test Fixtures
//!
//! Builders shared by the scenario tests and benchmarks.

use dr_01_asset_registry::adapters::{
    InMemoryLedger, JsonRecordSerializer, ManualClock, StaticIdentity, TxIdSource,
};
use dr_01_asset_registry::{
    AssetRegistryService, AssetRequest, PlaintextPin, RegistryConfig, RegistryDependencies,
};
use std::sync::Arc;

/// Registry over an in-memory ledger.
pub type MemoryRegistry = AssetRegistryService<InMemoryLedger, JsonRecordSerializer>;

/// The default privileged organization.
pub fn privileged() -> StaticIdentity {
    StaticIdentity::new("Org1MSP")
}

/// A member organization without write access.
pub fn member() -> StaticIdentity {
    StaticIdentity::new("Org2MSP")
}

/// Registry on a manual clock with sequential tx ids.
pub fn registry(config: RegistryConfig) -> (MemoryRegistry, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let ledger = InMemoryLedger::with_clock(clock.clone()).with_tx_ids(TxIdSource::sequential());
    let service = AssetRegistryService::new(
        RegistryDependencies {
            ledger,
            serializer: JsonRecordSerializer,
        },
        config,
    );
    (service, clock)
}

/// Create/Update request with neutral transaction fields.
pub fn request(dealer_id: &str, msisdn: &str, pin: &str, balance: f64, status: &str) -> AssetRequest {
    AssetRequest {
        dealer_id: dealer_id.to_string(),
        msisdn: msisdn.to_string(),
        pin: PlaintextPin::new(pin),
        balance,
        status: status.to_string(),
        txn_amount: 0.0,
        txn_type: "NA".to_string(),
        remarks: String::new(),
    }
}
