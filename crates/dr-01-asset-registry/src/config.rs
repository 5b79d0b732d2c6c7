//! # Registry Configuration
//!
//! Values injected at construction. Nothing here is read from the
//! environment; hosts build a [`RegistryConfig`] and pass it in.

use crate::domain::status::StatusTransitionTable;
use crate::errors::RegistryError;

/// Default privileged organization.
pub const DEFAULT_PRIVILEGED_IDENTITY: &str = "Org1MSP";

/// Identity gate configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// The one MSP ID allowed to create, update and delete records.
    pub privileged_identity: String,
}

impl GateConfig {
    /// Gate for the given privileged identity.
    pub fn new(privileged_identity: impl Into<String>) -> Self {
        Self {
            privileged_identity: privileged_identity.into(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRIVILEGED_IDENTITY)
    }
}

/// Complete registry configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Identity gate.
    pub gate: GateConfig,
    /// Status changes permitted on Update (default: any-to-any).
    pub status_transitions: StatusTransitionTable,
}

impl RegistryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the privileged identity.
    pub fn with_privileged_identity(mut self, identity: impl Into<String>) -> Self {
        self.gate = GateConfig::new(identity);
        self
    }

    /// Set the status transition table.
    pub fn with_status_transitions(mut self, table: StatusTransitionTable) -> Self {
        self.status_transitions = table;
        self
    }

    /// Rejects configurations that would make the gate meaningless.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let identity = &self.gate.privileged_identity;
        if identity.trim().is_empty() {
            return Err(RegistryError::invalid(
                "privileged_identity",
                "must not be empty",
            ));
        }
        if identity.trim() != identity {
            return Err(RegistryError::invalid(
                "privileged_identity",
                "must not have surrounding whitespace",
            ));
        }
        Ok(())
    }
}
