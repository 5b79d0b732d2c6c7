//! # Registry Host
//!
//! Builds the registry over the configured ledger, seeds it on first start
//! and serves the invocation stream.

use crate::config::NodeConfig;
use crate::invocation::handle_line;
use anyhow::{Context, Result};
use dr_01_asset_registry::adapters::{FileBackedLedger, InMemoryLedger, JsonRecordSerializer};
use dr_01_asset_registry::{
    AssetRegistryApi, AssetRegistryService, RegistryDependencies, VersionedLedger,
};
use std::io::{BufRead, Write};
use tracing::info;

/// Registry over a JSON-encoded ledger.
pub type Registry<L> = AssetRegistryService<L, JsonRecordSerializer>;

/// Wraps `ledger` in a registry configured from `config`.
pub fn build_registry<L: VersionedLedger>(ledger: L, config: &NodeConfig) -> Registry<L> {
    AssetRegistryService::new(
        RegistryDependencies {
            ledger,
            serializer: JsonRecordSerializer,
        },
        config.registry_config(),
    )
}

/// Opens the file-backed ledger named by the configuration.
pub fn open_file_ledger(config: &NodeConfig) -> Result<Option<FileBackedLedger>> {
    config
        .ledger_path
        .as_ref()
        .map(|path| {
            FileBackedLedger::open(path)
                .with_context(|| format!("failed to open ledger at {}", path.display()))
        })
        .transpose()
}

/// In-memory ledger for runs without a ledger path.
pub fn memory_ledger() -> InMemoryLedger {
    InMemoryLedger::new()
}

/// Runs InitLedger if seeding is enabled and the ledger has no live records.
///
/// Returns the number of records written.
pub fn seed_if_empty(api: &dyn AssetRegistryApi, config: &NodeConfig) -> Result<usize> {
    if !config.seed_genesis {
        return Ok(0);
    }
    let live = api
        .get_all_assets()
        .context("failed to inspect ledger before seeding")?;
    if !live.is_empty() {
        info!(records = live.len(), "[node] ledger already populated, skipping genesis");
        return Ok(0);
    }
    let written = api.init_ledger().context("failed to write genesis records")?;
    info!(records = written, "[node] genesis records written");
    Ok(written)
}

/// Answers every non-blank input line with one response line.
///
/// Returns the number of invocations handled.
pub fn serve<R: BufRead, W: Write>(
    api: &dyn AssetRegistryApi,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut handled = 0;
    for line in input.lines() {
        let line = line.context("failed to read invocation")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(api, &line);
        writeln!(output, "{response}").context("failed to write response")?;
        output.flush().context("failed to flush response")?;
        handled += 1;
    }
    Ok(handled)
}
