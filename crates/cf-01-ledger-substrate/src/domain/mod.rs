//! Domain Layer - versioning, read/write sets, clocks, transaction ids.
//!
//! RULES:
//! - No locking
//! - No I/O

pub mod clock;
pub mod rwset;
pub mod txid;
pub mod versioned;

pub use clock::{LedgerClock, SteppingClock, SystemClock};
pub use rwset::{RangeRead, ReadWriteSet};
pub use txid::derive_tx_id;
pub use versioned::{CommitReceipt, Version, VersionedValue};
