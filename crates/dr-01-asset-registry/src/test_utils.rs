//! Shared test helpers.

use crate::adapters::{InMemoryLedger, JsonRecordSerializer, ManualClock, StaticIdentity, TxIdSource};
use crate::config::RegistryConfig;
use crate::domain::credential::PlaintextPin;
use crate::domain::entities::AssetRequest;
use crate::service::{AssetRegistryService, RegistryDependencies};
use std::sync::Arc;

pub(crate) type TestService = AssetRegistryService<InMemoryLedger, JsonRecordSerializer>;

/// Caller from the default privileged organization.
pub(crate) fn org1() -> StaticIdentity {
    StaticIdentity::new("Org1MSP")
}

/// Caller from some other organization.
pub(crate) fn org2() -> StaticIdentity {
    StaticIdentity::new("Org2MSP")
}

/// Service on a manual clock with `tx-000001`-style ids.
pub(crate) fn make_test_service(config: RegistryConfig) -> (TestService, Arc<ManualClock>) {
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

pub(crate) fn make_request(dealer_id: &str, pin: &str, balance: f64, status: &str) -> AssetRequest {
    AssetRequest {
        dealer_id: dealer_id.to_string(),
        msisdn: "919000000000".to_string(),
        pin: PlaintextPin::new(pin),
        balance,
        status: status.to_string(),
        txn_amount: 0.0,
        txn_type: "NA".to_string(),
        remarks: "test account".to_string(),
    }
}
