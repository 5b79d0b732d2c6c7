use crate::errors::LedgerError;
use crate::ports::outbound::LedgerCursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cursor over a snapshot taken when the query was issued.
///
/// Each open cursor is counted against its ledger until closed, so tests
/// can assert that no query leaks one.
pub struct SnapshotCursor<T> {
    items: std::vec::IntoIter<T>,
    open: Arc<AtomicUsize>,
    closed: bool,
}

impl<T> SnapshotCursor<T> {
    pub(crate) fn new(items: Vec<T>, open: Arc<AtomicUsize>) -> Self {
        open.fetch_add(1, Ordering::SeqCst);
        Self {
            items: items.into_iter(),
            open,
            closed: false,
        }
    }
}

impl<T: Send> LedgerCursor<T> for SnapshotCursor<T> {
    fn next_entry(&mut self) -> Option<Result<T, LedgerError>> {
        if self.closed {
            return Some(Err(LedgerError::CursorClosed));
        }
        self.items.next().map(Ok)
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.open.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
