//! # Ledger Substrate Port
//!
//! The driven port every chaincode operation reads and writes through.
//! One stub instance represents one invocation's transaction context.
//!
//! ## Substrate Guarantees (not implemented by the chaincode)
//!
//! - All writes of one invocation commit atomically or not at all.
//! - Concurrent writers to the same key are resolved at commit time by
//!   optimistic concurrency control; the loser must be resubmitted.
//! - Reads observe committed state; an invocation does not see its own
//!   uncommitted writes.
//! - Every committed write appends one revision to the key's history.

use crate::errors::{IdentityError, LedgerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One committed revision of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModification {
    /// Transaction that committed this revision.
    pub tx_id: String,
    /// Commit timestamp of that transaction.
    pub timestamp: DateTime<Utc>,
    /// Value stored at this revision.
    pub value: Vec<u8>,
}

/// Transaction context handed to the chaincode for one invocation.
pub trait ChaincodeStub {
    /// Transaction id of the current invocation.
    fn tx_id(&self) -> &str;

    /// Timestamp assigned to the current invocation by the substrate.
    fn tx_timestamp(&self) -> DateTime<Utc>;

    /// Identity of the caller, extracted from the signed creator.
    fn creator(&self) -> Result<String, IdentityError>;

    /// Point lookup. `Ok(None)` when no value is stored.
    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Stage a write for commit with this invocation.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// All committed `(key, value)` pairs whose key extends the partial
    /// composite key, in ascending key order.
    fn get_state_by_partial_composite_key(
        &mut self,
        index: &str,
        components: &[&str],
    ) -> Result<Vec<(String, Vec<u8>)>, LedgerError>;

    /// Committed revision log of a key, in the substrate's native order.
    fn get_history_for_key(&self, key: &str) -> Result<Vec<KeyModification>, LedgerError>;
}
