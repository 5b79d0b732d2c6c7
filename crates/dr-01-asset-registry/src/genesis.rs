//! # Genesis Seed Set
//!
//! The five dealer accounts written by `InitLedger` on a fresh network.

use crate::domain::credential::PlaintextPin;
use crate::domain::entities::{Asset, AssetRequest};
use crate::errors::RegistryError;

/// One seed row; the PIN is hashed before anything is written.
struct SeedRow {
    dealer_id: &'static str,
    msisdn: &'static str,
    pin: &'static str,
    balance: f64,
    status: &'static str,
    txn_amount: f64,
    txn_type: &'static str,
    remarks: &'static str,
}

const SEED: [SeedRow; 5] = [
    SeedRow {
        dealer_id: "DLR001",
        msisdn: "919876543210",
        pin: "4321",
        balance: 10000.00,
        status: "ACTIVE",
        txn_amount: 0.0,
        txn_type: "NA",
        remarks: "Initial account opening",
    },
    SeedRow {
        dealer_id: "DLR002",
        msisdn: "918123456789",
        pin: "1234",
        balance: 5000.25,
        status: "ACTIVE",
        txn_amount: 1000.00,
        txn_type: "DEPOSIT",
        remarks: "First top\u{2011}up",
    },
    SeedRow {
        dealer_id: "DLR003",
        msisdn: "919912345678",
        pin: "9834",
        balance: 200.50,
        status: "SUSPENDED",
        txn_amount: 150.00,
        txn_type: "WITHDRAWAL",
        remarks: "ATM cash\u{2011}out \u{2014} flagged for review",
    },
    SeedRow {
        dealer_id: "DLR004",
        msisdn: "917012345678",
        pin: "2468",
        balance: 0.00,
        status: "BLOCKED",
        txn_amount: 0.00,
        txn_type: "NA",
        remarks: "Account blocked due to suspected fraud",
    },
    SeedRow {
        dealer_id: "DLR005",
        msisdn: "919876123450",
        pin: "1357",
        balance: 7500.75,
        status: "ACTIVE",
        txn_amount: 500.75,
        txn_type: "TRANSFER",
        remarks: "Transfer to dealer DLR002",
    },
];

/// Number of seeded accounts.
pub const SEED_COUNT: usize = SEED.len();

/// Builds the seed records, hashing each PIN.
pub fn seed_assets() -> Result<Vec<Asset>, RegistryError> {
    SEED.iter()
        .map(|row| {
            AssetRequest {
                dealer_id: row.dealer_id.to_string(),
                msisdn: row.msisdn.to_string(),
                pin: PlaintextPin::new(row.pin),
                balance: row.balance,
                status: row.status.to_string(),
                txn_amount: row.txn_amount,
                txn_type: row.txn_type.to_string(),
                remarks: row.remarks.to_string(),
            }
            .into_asset()
        })
        .collect()
}
