//! # Versioned Values
//!
//! Every committed value carries the version of the transaction that wrote
//! it. Versions are the commit sequence number, starting at 1.

use serde::{Deserialize, Serialize};

/// Commit sequence number of the transaction that last wrote a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version(pub u64);

/// A committed value and its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedValue {
    pub value: Vec<u8>,
    pub version: Version,
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Transaction id that was committed.
    pub tx_id: String,
    /// Version assigned to every key written by the transaction.
    pub version: Version,
    /// Number of keys written.
    pub keys_written: usize,
}
