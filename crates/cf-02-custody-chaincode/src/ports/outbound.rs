//! # Outbound Port - Ledger Substrate
//!
//! The chaincode reads and writes only through [`ChaincodeStub`]. The trait
//! lives in `cf-shared-types` so that substrates can implement it without
//! depending on this crate.

pub use cf_shared_types::{ChaincodeStub, KeyModification};
