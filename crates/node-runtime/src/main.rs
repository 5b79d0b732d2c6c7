//! # Dealer Registry Node Runtime
//!
//! Hosts the Asset Registry (dr-01) behind a JSON-lines invocation stream.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Validate configuration
//! 3. Initialize logging (stderr)
//! 4. Open the ledger (file-backed if `DR_LEDGER_PATH` is set)
//! 5. Seed genesis records if the ledger is empty
//! 6. Serve invocations from stdin until EOF

use anyhow::{Context, Result};
use dr_01_asset_registry::{AssetRegistryApi, SUBSYSTEM_NAME, VERSION};
use node_runtime::{
    build_registry, logging::init_logging, memory_ledger, open_file_ledger, seed_if_empty, serve,
    NodeConfig,
};
use tracing::info;

fn run(api: &dyn AssetRegistryApi, config: &NodeConfig) -> Result<()> {
    seed_if_empty(api, config)?;

    info!("[node] ready, reading invocations from stdin");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = serve(api, stdin.lock(), stdout.lock())?;

    info!(handled, "[node] input closed, shutting down");
    Ok(())
}

fn main() -> Result<()> {
    let config = NodeConfig::from_env();
    config.validate().context("invalid node configuration")?;
    init_logging(&config)?;

    info!("===========================================");
    info!("  Dealer Registry Node Runtime v{VERSION}");
    info!("  Subsystem: {SUBSYSTEM_NAME}");
    info!("===========================================");
    info!(
        privileged_msp = %config.privileged_msp,
        strict_status = config.strict_status,
        "[node] configuration loaded"
    );

    match open_file_ledger(&config)? {
        Some(ledger) => {
            info!(path = %ledger.path().display(), "[node] using file-backed ledger");
            run(&build_registry(ledger, &config), &config)
        }
        None => {
            info!("[node] using in-memory ledger");
            run(&build_registry(memory_ledger(), &config), &config)
        }
    }
}
