//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for dealer records.
//! NO I/O, NO ledger access.
//!
//! - `value_objects`: dealer id, status, transaction type
//! - `credential`: PIN hashing and verification
//! - `entities`: the record, its request form and history view
//! - `identity`: the privileged-identity rule
//! - `status`: permitted status transitions
//! - `invariants`: checks over outgoing values

pub mod credential;
pub mod entities;
pub mod identity;
pub mod invariants;
pub mod status;
pub mod value_objects;

pub use credential::*;
pub use entities::*;
pub use identity::*;
pub use invariants::*;
pub use status::*;
pub use value_objects::*;
