//! # Value Objects
//!
//! Immutable domain primitives for dealer records.
//! These types represent concepts that are defined by their value, not identity.

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DEALER ID
// =============================================================================

/// Primary key of a dealer record.
///
/// Non-empty, no surrounding whitespace, no control characters. Immutable
/// once the record is created.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DealerId(String);

impl DealerId {
    /// Maximum accepted length in bytes.
    pub const MAX_LEN: usize = 64;

    /// Validates and wraps a raw dealer id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(RegistryError::invalid("dealer_id", "must not be empty"));
        }
        if raw.len() > Self::MAX_LEN {
            return Err(RegistryError::invalid(
                "dealer_id",
                format!("longer than {} bytes", Self::MAX_LEN),
            ));
        }
        if raw.trim() != raw {
            return Err(RegistryError::invalid(
                "dealer_id",
                "must not have surrounding whitespace",
            ));
        }
        if raw.chars().any(char::is_control) {
            return Err(RegistryError::invalid(
                "dealer_id",
                "must not contain control characters",
            ));
        }
        Ok(Self(raw))
    }

    /// Ledger key for this dealer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DealerId {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DealerId> for String {
    fn from(id: DealerId) -> Self {
        id.0
    }
}

impl fmt::Debug for DealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DealerId({})", self.0)
    }
}

impl fmt::Display for DealerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ACCOUNT STATUS
// =============================================================================

/// State of a dealer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Account may transact.
    Active,
    /// Temporarily frozen pending review.
    Suspended,
    /// Blocked for suspected fraud or compliance reasons.
    Blocked,
    /// Permanently closed.
    Closed,
}

impl AccountStatus {
    /// All known statuses.
    pub const ALL: [Self; 4] = [Self::Active, Self::Suspended, Self::Blocked, Self::Closed];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Blocked => "BLOCKED",
            Self::Closed => "CLOSED",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                RegistryError::invalid(
                    "status",
                    format!("unknown status {s:?}, expected one of ACTIVE, SUSPENDED, BLOCKED, CLOSED"),
                )
            })
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TRANSACTION TYPE
// =============================================================================

/// Kind of the most recent transaction on an account.
///
/// New records only take the four known kinds (see the `FromStr` impl).
/// Stored records may carry any string, which decodes as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Funds added.
    Deposit,
    /// Funds removed.
    Withdrawal,
    /// Funds moved to another dealer.
    Transfer,
    /// No transaction yet.
    NotApplicable,
    /// A kind written before input was restricted.
    Other(String),
}

impl TransactionType {
    /// All kinds accepted on Create and Update.
    pub const ALL: [Self; 4] = [
        Self::Deposit,
        Self::Withdrawal,
        Self::Transfer,
        Self::NotApplicable,
    ];

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer => "TRANSFER",
            Self::NotApplicable => "NA",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or(Self::Other(raw))
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TransactionType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                RegistryError::invalid(
                    "txn_type",
                    format!("unknown transaction type {s:?}, expected one of DEPOSIT, WITHDRAWAL, TRANSFER, NA"),
                )
            })
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================
