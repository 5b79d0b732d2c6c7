//! # Domain Invariants
//!
//! Checks over values leaving the registry.
//!
//! - INVARIANT-1: Current reads never expose a credential digest
//! - INVARIANT-2: History is in commit order
//! - INVARIANT-3: A revision is a tombstone iff it carries no record
//! - INVARIANT-4: Every history record belongs to the queried key

use super::entities::{Asset, HistoryEntry};
use super::value_objects::DealerId;

/// INVARIANT-1: Redaction on current reads.
#[must_use]
pub fn check_redaction_invariant(asset: &Asset) -> bool {
    asset.credential.is_redacted()
}

/// INVARIANT-2: Chronological history.
///
/// Timestamps are non-decreasing; revisions committed in the same second
/// keep ledger order.
#[must_use]
pub fn check_history_order_invariant(entries: &[HistoryEntry]) -> bool {
    entries
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp)
}

/// INVARIANT-3: Tombstone shape.
#[must_use]
pub fn check_tombstone_invariant(entries: &[HistoryEntry]) -> bool {
    entries
        .iter()
        .all(|entry| entry.is_delete == entry.record.is_none())
}

/// INVARIANT-4: Key consistency.
#[must_use]
pub fn check_history_key_invariant(dealer_id: &DealerId, entries: &[HistoryEntry]) -> bool {
    entries
        .iter()
        .filter_map(|entry| entry.record.as_ref())
        .all(|record| &record.dealer_id == dealer_id)
}

/// Violation found by [`check_history_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Timestamps went backwards.
    OutOfOrder,
    /// Tombstone carried a record, or a live revision carried none.
    MalformedTombstone,
    /// A revision decoded to a different dealer id.
    ForeignRecord,
}

/// Runs all history checks.
#[must_use]
pub fn check_history_invariants(
    dealer_id: &DealerId,
    entries: &[HistoryEntry],
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    if !check_history_order_invariant(entries) {
        violations.push(InvariantViolation::OutOfOrder);
    }
    if !check_tombstone_invariant(entries) {
        violations.push(InvariantViolation::MalformedTombstone);
    }
    if !check_history_key_invariant(dealer_id, entries) {
        violations.push(InvariantViolation::ForeignRecord);
    }
    violations
}
