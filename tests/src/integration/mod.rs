//! Cross-crate flows: chaincode over the in-memory ledger, and the peer
//! runtime replaying scripts.

pub mod flows;
