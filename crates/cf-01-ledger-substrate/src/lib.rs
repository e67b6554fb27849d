//! # cf-01-ledger-substrate
//!
//! In-memory ledger substrate for the custody chaincode.
//!
//! ## Role in System
//!
//! - **World State**: Committed key-value pairs, each tagged with the
//!   commit sequence number of the transaction that last wrote it
//! - **Revision Log**: Per-key append-only history of committed values
//! - **Transaction Context**: One `TransactionContext` per invocation,
//!   implementing `ChaincodeStub` with a buffered write set
//!
//! ## Commit Flow
//!
//! ```text
//! begin(creator) ──→ TransactionContext ──→ chaincode reads/writes
//!                                                   │
//!                        ┌──────────────────────────┴───────────┐
//!                        ↓                                      ↓
//!                 commit(ctx)                             discard(ctx)
//!          validate read set (MVCC)                   write set dropped
//!          apply write set atomically
//!          append one revision per written key
//! ```
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | All writes of an invocation commit together or not at all | `adapters/memory_ledger.rs` - `commit()` |
//! | INVARIANT-2 | A stale read aborts the commit | `domain/rwset.rs` - `validate()` |
//! | INVARIANT-3 | History is append-only and oldest-first | `adapters/memory_ledger.rs` - `commit()` |

pub mod adapters;
pub mod domain;

pub use adapters::{InMemoryLedger, TransactionContext};
pub use domain::{
    derive_tx_id, CommitReceipt, LedgerClock, RangeRead, ReadWriteSet, SteppingClock,
    SystemClock, Version, VersionedValue,
};

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Ledger Substrate";
