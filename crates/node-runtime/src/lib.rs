//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Modules
//!
//! - `config` - Environment configuration
//! - `logging` - Subscriber setup (stderr)
//! - `invocation` - JSON-lines envelope and dispatch
//! - `host` - Ledger selection, genesis seeding, serve loop

pub mod config;
pub mod host;
pub mod invocation;
pub mod logging;

pub use config::{ConfigError, NodeConfig};
pub use host::{build_registry, memory_ledger, open_file_ledger, seed_if_empty, serve, Registry};
pub use invocation::{dispatch, handle_line, Invocation, InvocationError, Response};
