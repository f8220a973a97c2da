//! # Payment-Chain Test Suite
//!
//! Unified test crate for cross-module flows of the network-parameter
//! registry.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-module flows
//!     ├── profile_flows.rs     # Derivation chain end to end
//!     └── registry_flows.rs    # Selection and mutation lifecycle
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pc-tests
//!
//! # By category
//! cargo test -p pc-tests integration::
//! ```

pub mod integration;
