//! # Status Transitions
//!
//! Explicit table of permitted account status changes.
//!
//! The default table is permissive: any status may follow any other, which
//! is how records have always been written. Tightening the rules is a matter
//! of installing a different table in [`crate::config::RegistryConfig`].

use super::value_objects::AccountStatus;
use crate::errors::{ErrorContext, RegistryError};
use std::collections::HashSet;

/// Permitted `(from, to)` status changes applied on Update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusTransitionTable {
    /// Every transition is allowed.
    #[default]
    Permissive,
    /// Only listed transitions are allowed. Staying in the same status is
    /// always allowed.
    Restricted(HashSet<(AccountStatus, AccountStatus)>),
}

impl StatusTransitionTable {
    /// Any-to-any table.
    #[must_use]
    pub fn permissive() -> Self {
        Self::Permissive
    }

    /// Empty restricted table; add edges with [`Self::allow`].
    #[must_use]
    pub fn restricted() -> Self {
        Self::Restricted(HashSet::new())
    }

    /// Conventional account lifecycle.
    ///
    /// ```text
    /// ACTIVE <-> SUSPENDED
    ///   |            |
    ///   +--> BLOCKED <+
    ///          |
    ///          +--> ACTIVE (after review)
    /// any (except CLOSED) --> CLOSED
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        use AccountStatus::{Active, Blocked, Closed, Suspended};
        Self::restricted()
            .allow(Active, Suspended)
            .allow(Suspended, Active)
            .allow(Active, Blocked)
            .allow(Suspended, Blocked)
            .allow(Blocked, Active)
            .allow(Active, Closed)
            .allow(Suspended, Closed)
            .allow(Blocked, Closed)
    }

    /// Adds an edge. Has no effect on a permissive table.
    #[must_use]
    pub fn allow(mut self, from: AccountStatus, to: AccountStatus) -> Self {
        if let Self::Restricted(edges) = &mut self {
            edges.insert((from, to));
        }
        self
    }

    /// Returns true if `from -> to` is permitted.
    #[must_use]
    pub fn is_allowed(&self, from: AccountStatus, to: AccountStatus) -> bool {
        match self {
            Self::Permissive => true,
            Self::Restricted(edges) => from == to || edges.contains(&(from, to)),
        }
    }

    /// Fails with `InvalidStatusTransition` if `from -> to` is not permitted.
    pub fn check(&self, from: AccountStatus, to: AccountStatus) -> Result<(), RegistryError> {
        if self.is_allowed(from, to) {
            Ok(())
        } else {
            Err(RegistryError::InvalidStatusTransition {
                from,
                to,
                context: ErrorContext::default(),
            })
        }
    }
}
