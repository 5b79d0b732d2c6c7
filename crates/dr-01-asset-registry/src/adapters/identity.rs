use crate::errors::RegistryError;
use crate::ports::outbound::IdentityProvider;

/// Caller identity already extracted by the host.
///
/// The node runtime builds one per invocation from the envelope's `caller`
/// field; an absent or blank caller cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity {
    msp_id: Option<String>,
}

impl StaticIdentity {
    /// Caller belonging to `msp_id`.
    pub fn new(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: Some(msp_id.into()),
        }
    }

    /// Invocation context without a caller.
    pub fn anonymous() -> Self {
        Self { msp_id: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn caller_msp_id(&self) -> Result<String, RegistryError> {
        match self.msp_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
            Some(_) => Err(RegistryError::unresolved_identity("caller MSP ID is blank")),
            None => Err(RegistryError::unresolved_identity(
                "invocation carries no caller identity",
            )),
        }
    }
}
