//! # Domain Entities
//!
//! The dealer record, the request that produces it, and the history view.

use super::credential::{hash_pin, CredentialDigest, PlaintextPin};
use super::value_objects::{AccountStatus, DealerId, TransactionType};
use crate::errors::RegistryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ASSET
// =============================================================================

/// A dealer account record, the only persisted entity.
///
/// Field names on the wire are fixed for compatibility with existing ledger
/// data. `MPIN` always holds a digest, never a PIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Primary key.
    #[serde(rename = "DEALERID")]
    pub dealer_id: DealerId,
    /// Subscriber number, opaque to the registry.
    #[serde(rename = "MSISDN")]
    pub msisdn: String,
    /// SHA-256 of the PIN; blank on reads.
    #[serde(rename = "MPIN")]
    pub credential: CredentialDigest,
    /// Current balance.
    #[serde(rename = "BALANCE")]
    pub balance: f64,
    /// Account state.
    #[serde(rename = "STATUS")]
    pub status: AccountStatus,
    /// Amount of the most recent transaction.
    #[serde(rename = "TRANSAMOUNT")]
    pub txn_amount: f64,
    /// Kind of the most recent transaction.
    #[serde(rename = "TRANSTYPE")]
    pub txn_type: TransactionType,
    /// Free-text annotation.
    #[serde(rename = "REMARKS")]
    pub remarks: String,
}

impl Asset {
    /// Copy of this record with the credential cleared for display.
    #[must_use]
    pub fn redacted(mut self) -> Self {
        self.credential = CredentialDigest::redacted();
        self
    }
}

// =============================================================================
// ASSET REQUEST
// =============================================================================

/// Caller-supplied fields for Create and Update.
///
/// Update is a full replace, so both take the same shape.
#[derive(Debug, Clone)]
pub struct AssetRequest {
    pub dealer_id: String,
    pub msisdn: String,
    pub pin: PlaintextPin,
    pub balance: f64,
    pub status: String,
    pub txn_amount: f64,
    pub txn_type: String,
    pub remarks: String,
}

impl AssetRequest {
    /// Validates every field and hashes the PIN into a storable record.
    pub fn into_asset(self) -> Result<Asset, RegistryError> {
        let dealer_id = DealerId::parse(self.dealer_id)?;
        self.pin.validate()?;
        check_amount("balance", self.balance)?;
        check_amount("txn_amount", self.txn_amount)?;
        let status = self.status.parse::<AccountStatus>()?;
        let txn_type = self.txn_type.parse::<TransactionType>()?;

        Ok(Asset {
            dealer_id,
            msisdn: self.msisdn,
            credential: hash_pin(&self.pin),
            balance: self.balance,
            status,
            txn_amount: self.txn_amount,
            txn_type,
            remarks: self.remarks,
        })
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), RegistryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RegistryError::invalid(field, "must be a finite number"))
    }
}

// =============================================================================
// HISTORY ENTRY
// =============================================================================

/// One revision of a dealer key.
///
/// Unlike current reads, `record` keeps its credential digest: the audit
/// trail shows exactly what was committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Committed record, absent for tombstones.
    pub record: Option<Asset>,
    /// Transaction that wrote this revision.
    #[serde(rename = "txId")]
    pub tx_id: String,
    /// Commit time, rendered as `YYYY-MM-DD HH:MM:SS` (UTC).
    #[serde(with = "history_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// True for a deletion marker.
    #[serde(rename = "isDelete")]
    pub is_delete: bool,
}

mod history_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
