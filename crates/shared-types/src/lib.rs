//! # Shared Types Crate
//!
//! This crate contains the contract between the custody chaincode and the
//! ledger substrate it runs on.
//!
//! ## Design Principles
//!
//! - **One Key Space**: Registry, settings, cartons and packages are all
//!   namespaced regions of a single key-value space. Namespacing is done
//!   with composite keys (`keys`), never with separate stores.
//! - **Synchronous Substrate**: Every call on `ChaincodeStub` completes
//!   within the invocation's transaction context. Atomic commit, MVCC and
//!   the revision log belong to the substrate, not to the chaincode.
//! - **Response Envelope**: Every invocation ends in a `Response`, either a
//!   payload or a failure message, never both.

pub mod envelope;
pub mod errors;
pub mod keys;
pub mod stub;

pub use envelope::{Response, ResponseStatus};
pub use errors::*;
pub use keys::{CompositeKey, MAX_UNICODE_RUNE, MIN_UNICODE_RUNE};
pub use stub::{ChaincodeStub, KeyModification};
