//! # Error Types
//!
//! All error types for the asset registry.
//!
//! Every failure path returns one of these; nothing is retried or swallowed
//! inside the registry. Messages carry the operation and dealer id but never
//! the credential field.

use crate::domain::value_objects::AccountStatus;
use std::fmt;
use thiserror::Error;

// =============================================================================
// ERROR CONTEXT
// =============================================================================

/// Operation and dealer id attached to errors raised below the service.
///
/// Domain validation does not know which operation it runs under; the
/// service fills this in on the way out. Renders as a message prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub operation: Option<&'static str>,
    pub dealer_id: Option<String>,
}

impl ErrorContext {
    /// Context naming both the operation and the key.
    #[must_use]
    pub fn new(operation: &'static str, dealer_id: impl Into<String>) -> Self {
        Self {
            operation: Some(operation),
            dealer_id: Some(dealer_id.into()),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.operation, self.dealer_id.as_deref()) {
            (Some(operation), Some(dealer_id)) => write!(f, "{operation} dealer {dealer_id:?}: "),
            (Some(operation), None) => write!(f, "{operation}: "),
            (None, Some(dealer_id)) => write!(f, "dealer {dealer_id:?}: "),
            (None, None) => Ok(()),
        }
    }
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by registry operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// Caller's organization is not the privileged identity.
    #[error("{operation}: unauthorized for dealer {dealer_id}, requires the privileged organization, caller is {msp_id}")]
    Unauthorized {
        operation: &'static str,
        dealer_id: String,
        msp_id: String,
    },

    /// The invocation context did not yield a caller identity.
    #[error("{context}failed to resolve caller identity: {reason}")]
    IdentityResolution {
        reason: String,
        context: ErrorContext,
    },

    /// Create collided with a live record.
    #[error("{operation}: dealer {dealer_id} already exists")]
    AlreadyExists {
        operation: &'static str,
        dealer_id: String,
    },

    /// Operation targeted a key with no live record.
    #[error("{operation}: dealer {dealer_id} does not exist")]
    NotFound {
        operation: &'static str,
        dealer_id: String,
    },

    /// Stored bytes did not parse as a dealer record.
    #[error("{operation}: failed to decode record for dealer {dealer_id}: {reason}")]
    Decode {
        operation: &'static str,
        dealer_id: String,
        reason: String,
    },

    /// Outgoing record could not be serialized.
    #[error("{operation}: failed to encode record for dealer {dealer_id}: {reason}")]
    Encode {
        operation: &'static str,
        dealer_id: String,
        reason: String,
    },

    /// The ledger reported an I/O failure.
    #[error("ledger {operation} failed for key {key:?}: {source}")]
    Storage {
        operation: &'static str,
        key: String,
        source: LedgerError,
    },

    /// A request field failed validation.
    #[error("{context}invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
        context: ErrorContext,
    },

    /// Status change is not permitted by the configured transition table.
    #[error("{context}status transition {from} -> {to} is not permitted")]
    InvalidStatusTransition {
        from: AccountStatus,
        to: AccountStatus,
        context: ErrorContext,
    },
}

impl RegistryError {
    /// Stable machine-readable name of the error class.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "Unauthorized",
            Self::IdentityResolution { .. } => "IdentityResolutionError",
            Self::AlreadyExists { .. } => "AlreadyExists",
            Self::NotFound { .. } => "NotFound",
            Self::Decode { .. } => "DecodeError",
            Self::Encode { .. } => "EncodeError",
            Self::Storage { .. } => "StorageError",
            Self::InvalidInput { .. } => "InvalidInput",
            Self::InvalidStatusTransition { .. } => "InvalidStatusTransition",
        }
    }

    /// Returns true if the caller may succeed by changing the request.
    ///
    /// Storage and decode failures are not the caller's to fix.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage { .. } | Self::Decode { .. } | Self::Encode { .. })
    }

    /// Fills in the operation and dealer id where the error does not
    /// carry them yet. Variants with fixed context are returned unchanged.
    #[must_use]
    pub fn with_context(mut self, operation: &'static str, dealer_id: &str) -> Self {
        if let Self::InvalidInput { context, .. }
        | Self::InvalidStatusTransition { context, .. }
        | Self::IdentityResolution { context, .. } = &mut self
        {
            context.operation.get_or_insert(operation);
            context
                .dealer_id
                .get_or_insert_with(|| dealer_id.to_string());
        }
        self
    }

    pub(crate) fn storage(operation: &'static str, key: &str, source: LedgerError) -> Self {
        Self::Storage {
            operation,
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
            context: ErrorContext::default(),
        }
    }

    /// Identity failure for `IdentityProvider` implementations.
    pub fn unresolved_identity(reason: impl Into<String>) -> Self {
        Self::IdentityResolution {
            reason: reason.into(),
            context: ErrorContext::default(),
        }
    }
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors raised by a versioned ledger backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted ledger content is unreadable.
    #[error("ledger data corrupted: {0}")]
    Corrupted(String),

    /// Cursor was used after it was closed.
    #[error("cursor already closed")]
    CursorClosed,

    /// Backend is not reachable.
    #[error("ledger unavailable")]
    Unavailable,
}

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Failure to translate between a record and its stored bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
