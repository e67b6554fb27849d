//! # Error Types
//!
//! Errors reported by the ledger substrate and the key space.

use thiserror::Error;

/// Errors raised while building or parsing a composite key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The index namespace was empty.
    #[error("composite key index must not be empty")]
    EmptyIndex,

    /// A component contains a reserved delimiter rune.
    #[error("invalid composite key component {component:?}: contains reserved rune U+{rune:04X}")]
    InvalidComponent { component: String, rune: u32 },

    /// The key is not a composite key.
    #[error("not a composite key: {0:?}")]
    NotComposite(String),
}

/// Errors reported by the ledger substrate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A key read during the invocation was committed by another
    /// transaction before this one.
    #[error("MVCC read conflict on key {key:?}")]
    MvccConflict { key: String },

    /// The key could not be constructed.
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// The substrate rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors raised while resolving the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The invocation carried no creator identity.
    #[error("invocation has no creator identity")]
    Missing,
}
