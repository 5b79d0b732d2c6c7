//! # Identity Gate
//!
//! Authorization rule for mutating operations: the caller's organization
//! (MSP ID) must equal the single privileged identity from configuration.

use crate::config::GateConfig;
use crate::errors::RegistryError;

/// Decides whether a resolved caller identity may mutate records.
#[derive(Debug, Clone)]
pub struct IdentityGate {
    privileged_identity: String,
}

impl IdentityGate {
    /// Creates a gate for the configured privileged identity.
    #[must_use]
    pub fn new(config: &GateConfig) -> Self {
        Self {
            privileged_identity: config.privileged_identity.clone(),
        }
    }

    /// The identity allowed to mutate.
    #[must_use]
    pub fn privileged_identity(&self) -> &str {
        &self.privileged_identity
    }

    /// Succeeds only if `msp_id` is the privileged identity.
    pub fn check(
        &self,
        msp_id: &str,
        operation: &'static str,
        dealer_id: &str,
    ) -> Result<(), RegistryError> {
        if msp_id == self.privileged_identity {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                operation,
                dealer_id: dealer_id.to_string(),
                msp_id: msp_id.to_string(),
            })
        }
    }
}
