//! Transaction id derivation.
//!
//! `tx_id = hex(SHA-256(nonce_be_bytes || creator))`, the same shape the
//! shim uses (hash of proposal nonce and creator).

use sha2::{Digest, Sha256};

/// Derive a transaction id from a proposal nonce and creator identity.
pub fn derive_tx_id(nonce: u64, creator: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(nonce.to_be_bytes());
    hasher.update(creator.as_bytes());
    hex::encode(hasher.finalize())
}
