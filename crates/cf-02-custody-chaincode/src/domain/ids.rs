//! # Deterministic Id Derivation
//!
//! Every peer executing the same invocation must produce the same ledger
//! writes, so ids are derived from the transaction id and a per-invocation
//! sequence number instead of a process-local random source:
//!
//! ```text
//! id = decimal( u64_be( SHA-256(tx_id ":" seq)[0..8] ) )
//! ```
//!
//! Sequence 0 is the carton; packages use 1..=packageNum.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Derive the id issued at position `seq` of transaction `tx_id`.
pub fn derive_id(tx_id: &str, seq: u64) -> String {
    let digest = Sha256::new()
        .chain_update(tx_id.as_bytes())
        .chain_update(b":")
        .chain_update(seq.to_string().as_bytes())
        .finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix).to_string()
}

/// Issues ids for one invocation.
///
/// Ids never repeat within a sequence: a derived id that was already
/// issued is skipped and the next position is used.
#[derive(Debug)]
pub struct IdSequence {
    tx_id: String,
    next: u64,
    issued: HashSet<String>,
}

impl IdSequence {
    pub fn new(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            next: 0,
            issued: HashSet::new(),
        }
    }

    /// Next unused id.
    pub fn next_id(&mut self) -> String {
        loop {
            let id = derive_id(&self.tx_id, self.next);
            self.next += 1;
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_transaction_same_ids() {
        let mut a = IdSequence::new("tx-1");
        let mut b = IdSequence::new("tx-1");
        for _ in 0..5 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_different_transactions_diverge() {
        assert_ne!(derive_id("tx-1", 0), derive_id("tx-2", 0));
        assert_ne!(derive_id("tx-1", 0), derive_id("tx-1", 1));
    }

    #[test]
    fn test_ids_are_decimal_u64() {
        let id = derive_id("tx-1", 0);
        assert!(id.parse::<u64>().is_ok());
    }

    #[test]
    fn test_sequence_never_repeats() {
        let mut ids = IdSequence::new("tx-1");
        let issued: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
        assert_eq!(ids.issued(), 1000);
    }
}
