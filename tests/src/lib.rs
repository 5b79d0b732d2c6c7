//! # Dealer Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs      # Shared service builders and requests
//! │   └── integration/     # End-to-end registry scenarios
//! │       ├── lifecycle.rs
//! │       ├── audit.rs
//! │       ├── persistence.rs
//! │       └── node.rs
//! └── benches/
//!     └── registry_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dr-tests
//!
//! # By category
//! cargo test -p dr-tests integration::audit::
//!
//! # Benchmarks
//! cargo bench -p dr-tests
//! ```

pub mod fixtures;
