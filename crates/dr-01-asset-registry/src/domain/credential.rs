//! # Credential Hasher
//!
//! One-way transform for account PINs.
//!
//! A [`PlaintextPin`] can only reach storage as a [`CredentialDigest`], and
//! the only way to build a non-empty digest from a PIN is [`hash_pin`].
//! `PlaintextPin` is deliberately not `Serialize` and redacts itself in
//! `Debug`, so it cannot leak into a record or a log line.
//!
//! The digest is unsalted SHA-256, kept for compatibility with stored data.

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Accepted PIN length range (digits).
pub const PIN_MIN_LEN: usize = 4;
/// Upper bound of the PIN length range.
pub const PIN_MAX_LEN: usize = 12;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

// =============================================================================
// PLAINTEXT PIN
// =============================================================================

/// A PIN as supplied by the caller. Never persisted.
#[derive(Clone)]
pub struct PlaintextPin(String);

impl PlaintextPin {
    /// Wraps a caller-supplied PIN without validating it.
    ///
    /// Use for verification candidates; enrollment goes through
    /// [`PlaintextPin::validate`].
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Checks the PIN is acceptable for enrollment.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let len = self.0.len();
        if len == 0 {
            return Err(RegistryError::invalid("pin", "must not be empty"));
        }
        if !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistryError::invalid("pin", "must contain only digits"));
        }
        if !(PIN_MIN_LEN..=PIN_MAX_LEN).contains(&len) {
            return Err(RegistryError::invalid(
                "pin",
                format!("must be {PIN_MIN_LEN} to {PIN_MAX_LEN} digits"),
            ));
        }
        Ok(())
    }

    fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for PlaintextPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlaintextPin(***)")
    }
}

// =============================================================================
// CREDENTIAL DIGEST
// =============================================================================

/// Hex-encoded SHA-256 of a PIN, or empty when redacted.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CredentialDigest(String);

impl CredentialDigest {
    /// The blank value shown to readers.
    #[must_use]
    pub fn redacted() -> Self {
        Self(String::new())
    }

    /// Returns true if this digest has been cleared for display.
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex string as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CredentialDigest {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self(value));
        }
        let well_formed = value.len() == DIGEST_HEX_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if well_formed {
            Ok(Self(value))
        } else {
            Err(RegistryError::invalid(
                "credential",
                "stored credential is not a SHA-256 hex digest",
            ))
        }
    }
}

impl From<CredentialDigest> for String {
    fn from(digest: CredentialDigest) -> Self {
        digest.0
    }
}

impl fmt::Debug for CredentialDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_redacted() {
            f.write_str("CredentialDigest(<redacted>)")
        } else {
            write!(f, "CredentialDigest({}...)", &self.0[..8])
        }
    }
}

// =============================================================================
// HASH / VERIFY
// =============================================================================

/// Hashes a PIN into its stored form.
#[must_use]
pub fn hash_pin(pin: &PlaintextPin) -> CredentialDigest {
    CredentialDigest(hex::encode(Sha256::digest(pin.expose())))
}

/// Returns true iff `candidate` hashes to `stored`.
///
/// A redacted digest never matches. The comparison is constant-time over
/// the digest bytes.
#[must_use]
pub fn verify_pin(candidate: &PlaintextPin, stored: &CredentialDigest) -> bool {
    if stored.is_redacted() {
        return false;
    }
    let computed = hash_pin(candidate);
    computed.0.as_bytes().ct_eq(stored.0.as_bytes()).into()
}

// =============================================================================
// TESTS
// =============================================================================
