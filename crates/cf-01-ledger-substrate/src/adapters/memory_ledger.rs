//! # In-Memory Ledger
//!
//! Committed world state plus per-key revision log, shared behind a
//! `parking_lot::RwLock`. Suitable for tests and for the single-process
//! peer host.
//!
//! ## History Order
//!
//! `history(key)` yields revisions OLDEST-FIRST, in commit order.

use crate::adapters::context::TransactionContext;
use crate::domain::{
    derive_tx_id, CommitReceipt, LedgerClock, ReadWriteSet, SystemClock, Version, VersionedValue,
};
use cf_shared_types::{KeyModification, LedgerError, Response};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

#[derive(Default)]
struct LedgerState {
    world: BTreeMap<String, VersionedValue>,
    history: HashMap<String, Vec<KeyModification>>,
    /// Version assigned to the last committed transaction.
    height: u64,
}

/// In-memory ledger substrate.
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
    clock: Box<dyn LedgerClock>,
    nonce: AtomicU64,
}

impl InMemoryLedger {
    /// Ledger stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Ledger stamped by a custom clock.
    pub fn with_clock(clock: impl LedgerClock + 'static) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            clock: Box::new(clock),
            nonce: AtomicU64::new(0),
        }
    }

    /// Open a transaction context for an invocation by `creator`.
    ///
    /// An empty `creator` models an invocation whose identity cannot be
    /// resolved; `creator()` on the context then fails.
    pub fn begin(&self, creator: &str) -> TransactionContext<'_> {
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        TransactionContext {
            ledger: self,
            tx_id: derive_tx_id(nonce, creator),
            timestamp: self.clock.now(),
            creator: creator.to_string(),
            rwset: ReadWriteSet::new(),
        }
    }

    /// Validate and apply a transaction context.
    ///
    /// All writes become visible together, or none do.
    pub fn commit(&self, ctx: TransactionContext<'_>) -> Result<CommitReceipt, LedgerError> {
        let TransactionContext {
            tx_id,
            timestamp,
            rwset,
            ..
        } = ctx;

        let mut state = self.state.write();
        if let Err(key) = rwset.validate(&state.world) {
            warn!(tx_id = %tx_id, key = %key, "MVCC read conflict, transaction invalidated");
            return Err(LedgerError::MvccConflict { key });
        }

        let version = Version(state.height + 1);
        let writes = rwset.into_writes();
        let keys_written = writes.len();
        if keys_written > 0 {
            state.height = version.0;
        }

        for (key, value) in writes {
            state
                .history
                .entry(key.clone())
                .or_default()
                .push(KeyModification {
                    tx_id: tx_id.clone(),
                    timestamp,
                    value: value.clone(),
                });
            state.world.insert(key, VersionedValue { value, version });
        }

        debug!(tx_id = %tx_id, keys_written, version = version.0, "transaction committed");
        Ok(CommitReceipt {
            tx_id,
            version,
            keys_written,
        })
    }

    /// Drop a transaction context without applying its writes.
    pub fn discard(&self, ctx: TransactionContext<'_>) {
        debug!(
            tx_id = %ctx.tx_id,
            staged = ctx.rwset.writes().len(),
            "transaction discarded"
        );
    }

    /// Run one invocation atomically.
    ///
    /// Commits when `invocation` returns a successful response, discards
    /// otherwise. A commit failure replaces the response with an error.
    pub fn execute<F>(&self, creator: &str, invocation: F) -> Response
    where
        F: FnOnce(&mut TransactionContext<'_>) -> Response,
    {
        let mut ctx = self.begin(creator);
        let response = invocation(&mut ctx);
        if !response.is_ok() {
            self.discard(ctx);
            return response;
        }
        match self.commit(ctx) {
            Ok(_) => response,
            Err(err) => Response::error(err.to_string()),
        }
    }

    /// Committed value at `key`.
    pub fn committed(&self, key: &str) -> Option<VersionedValue> {
        self.state.read().world.get(key).cloned()
    }

    /// Committed entries with `start <= key < end`, in key order.
    pub fn committed_range(&self, start: &str, end: &str) -> Vec<(String, VersionedValue)> {
        self.state
            .read()
            .world
            .range(start.to_string()..end.to_string())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Revision log of `key`, oldest first.
    pub fn history(&self, key: &str) -> Vec<KeyModification> {
        self.state
            .read()
            .history
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Version of the last committed transaction that wrote anything.
    pub fn height(&self) -> u64 {
        self.state.read().height
    }

    /// Number of committed keys.
    pub fn len(&self) -> usize {
        self.state.read().world.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
