use super::memory::{InMemoryLedger, Revision, RevisionLog};
use crate::adapters::time::SystemTimeSource;
use crate::errors::LedgerError;
use crate::ports::outbound::{HistoryCursor, StateCursor, TimeSource, VersionedLedger};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const FORMAT_VERSION: u32 = 1;

/// On-disk form of the revision log.
#[derive(Serialize, Deserialize)]
struct LedgerFile {
    version: u32,
    keys: BTreeMap<String, Vec<StoredRevision>>,
}

#[derive(Serialize, Deserialize)]
struct StoredRevision {
    tx_id: String,
    timestamp: DateTime<Utc>,
    /// Hex-encoded value, `null` for a tombstone.
    value: Option<String>,
}

/// Versioned ledger persisted to a single JSON file.
///
/// Every write rewrites the file atomically via a temp file and rename. A
/// write that fails to persist is rolled back in memory. Suitable for
/// development and single-node runs.
pub struct FileBackedLedger {
    inner: InMemoryLedger,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackedLedger {
    /// Opens the ledger at `path`, starting empty if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        Self::open_with_clock(path, Arc::new(SystemTimeSource))
    }

    /// Opens the ledger with the given commit clock.
    pub fn open_with_clock<P: AsRef<Path>>(
        path: P,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let log = match std::fs::read(&path) {
            Ok(bytes) => {
                let log = decode_file(&bytes)?;
                info!(
                    path = %path.display(),
                    keys = log.len(),
                    "[dr-01] loaded ledger file"
                );
                log
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "[dr-01] no ledger file, starting empty");
                RevisionLog::new()
            }
            Err(e) => return Err(LedgerError::Io(e.to_string())),
        };

        Ok(Self {
            inner: InMemoryLedger::from_log(log, clock),
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if no key has a live value.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of cursors handed out and not yet closed.
    pub fn open_cursors(&self) -> usize {
        self.inner.open_cursors()
    }

    /// Applies `write` to memory, then persists; restores memory on failure.
    fn write_through<F>(&self, write: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&InMemoryLedger) -> Result<(), LedgerError>,
    {
        let _guard = self.write_lock.lock();
        let before = self.inner.snapshot();
        write(&self.inner)?;
        if let Err(e) = self.save(&self.inner.snapshot()) {
            self.inner.restore(before);
            return Err(e);
        }
        Ok(())
    }

    fn save(&self, log: &RevisionLog) -> Result<(), LedgerError> {
        let io = |e: std::io::Error| LedgerError::Io(e.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io)?;
            }
        }

        let bytes = encode_file(log)?;
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io)?;
        file.write_all(&bytes).map_err(io)?;
        file.sync_all().map_err(io)?;
        std::fs::rename(&temp_path, &self.path).map_err(io)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "[dr-01] ledger persisted");
        Ok(())
    }
}

fn encode_file(log: &RevisionLog) -> Result<Vec<u8>, LedgerError> {
    let keys = log
        .iter()
        .map(|(key, revisions)| {
            let stored = revisions
                .iter()
                .map(|rev| StoredRevision {
                    tx_id: rev.tx_id.clone(),
                    timestamp: rev.timestamp,
                    value: rev.value.as_ref().map(hex::encode),
                })
                .collect();
            (key.clone(), stored)
        })
        .collect();
    let file = LedgerFile {
        version: FORMAT_VERSION,
        keys,
    };
    serde_json::to_vec_pretty(&file).map_err(|e| LedgerError::Io(e.to_string()))
}

fn decode_file(bytes: &[u8]) -> Result<RevisionLog, LedgerError> {
    let file: LedgerFile =
        serde_json::from_slice(bytes).map_err(|e| LedgerError::Corrupted(e.to_string()))?;
    if file.version != FORMAT_VERSION {
        return Err(LedgerError::Corrupted(format!(
            "unsupported ledger file version {}",
            file.version
        )));
    }

    let mut log = RevisionLog::new();
    for (key, stored) in file.keys {
        let mut revisions = Vec::with_capacity(stored.len());
        for rev in stored {
            let value = rev
                .value
                .map(|v| hex::decode(v).map_err(|e| LedgerError::Corrupted(format!("{key}: {e}"))))
                .transpose()?;
            revisions.push(Revision {
                tx_id: rev.tx_id,
                timestamp: rev.timestamp,
                value,
            });
        }
        log.insert(key, revisions);
    }
    Ok(log)
}

impl VersionedLedger for FileBackedLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.write_through(|ledger| ledger.put_state(key, value))
    }

    fn del_state(&self, key: &str) -> Result<(), LedgerError> {
        self.write_through(|ledger| ledger.del_state(key))
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<StateCursor, LedgerError> {
        self.inner.state_by_range(start, end)
    }

    fn history_for_key(&self, key: &str) -> Result<HistoryCursor, LedgerError> {
        self.inner.history_for_key(key)
    }
}
