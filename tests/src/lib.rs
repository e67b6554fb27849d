//! # Counterfight Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Ledger + chaincode fixture shared by all tests
//! ├── integration/      # End-to-end custody flows
//! │   └── flows.rs
//! └── properties.rs     # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cf-tests
//!
//! # By category
//! cargo test -p cf-tests integration::
//! cargo test -p cf-tests properties::
//! ```

pub mod harness;
pub mod integration;
pub mod properties;
