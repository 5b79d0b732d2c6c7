//! # Node Configuration
//!
//! Runtime parameters read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DR_PRIVILEGED_MSP` | `Org1MSP` | Organization allowed to mutate records |
//! | `DR_LEDGER_PATH` | unset | Ledger file; in-memory ledger when unset |
//! | `DR_SEED_GENESIS` | `true` | Run InitLedger when the ledger has no live records |
//! | `DR_STRICT_STATUS` | `false` | Enforce the strict status transition table |
//! | `DR_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `DR_JSON_LOGS` | `false` | JSON log lines instead of text |

use dr_01_asset_registry::{RegistryConfig, StatusTransitionTable, DEFAULT_PRIVILEGED_IDENTITY};
use std::path::PathBuf;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Organization allowed to create, update and delete.
    pub privileged_msp: String,
    /// Ledger file, `None` for an in-memory ledger.
    pub ledger_path: Option<PathBuf>,
    /// Seed an empty ledger at startup.
    pub seed_genesis: bool,
    /// Use the strict status transition table.
    pub strict_status: bool,
    /// `EnvFilter` directive.
    pub log_level: String,
    /// Emit logs as JSON.
    pub json_logs: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            privileged_msp: DEFAULT_PRIVILEGED_IDENTITY.to_string(),
            ledger_path: None,
            seed_genesis: true,
            strict_status: false,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The privileged organization is blank.
    #[error("DR_PRIVILEGED_MSP must name an organization")]
    EmptyPrivilegedIdentity,

    /// The ledger path is blank.
    #[error("DR_LEDGER_PATH is set but empty")]
    EmptyLedgerPath,
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            privileged_msp: lookup("DR_PRIVILEGED_MSP").unwrap_or(defaults.privileged_msp),
            ledger_path: lookup("DR_LEDGER_PATH").map(PathBuf::from),
            seed_genesis: lookup("DR_SEED_GENESIS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.seed_genesis),
            strict_status: lookup("DR_STRICT_STATUS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.strict_status),
            log_level: lookup("DR_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: lookup("DR_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Rejects configurations the node cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.privileged_msp.trim().is_empty() {
            return Err(ConfigError::EmptyPrivilegedIdentity);
        }
        if self
            .ledger_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyLedgerPath);
        }
        Ok(())
    }

    /// Registry configuration derived from this node configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        let transitions = if self.strict_status {
            StatusTransitionTable::strict()
        } else {
            StatusTransitionTable::permissive()
        };
        RegistryConfig::new()
            .with_privileged_identity(self.privileged_msp.clone())
            .with_status_transitions(transitions)
    }
}
