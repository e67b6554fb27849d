//! # Transaction Context
//!
//! One invocation's view of the ledger. Reads go to committed state and are
//! recorded in the read set; writes are buffered in the write set until the
//! owning `InMemoryLedger` commits or discards the context.

use crate::adapters::memory_ledger::InMemoryLedger;
use crate::domain::{RangeRead, ReadWriteSet};
use cf_shared_types::{ChaincodeStub, CompositeKey, IdentityError, KeyModification, LedgerError};
use chrono::{DateTime, Utc};
use tracing::trace;

/// Transaction context for a single invocation.
pub struct TransactionContext<'a> {
    pub(crate) ledger: &'a InMemoryLedger,
    pub(crate) tx_id: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) creator: String,
    pub(crate) rwset: ReadWriteSet,
}

impl<'a> TransactionContext<'a> {
    /// Read/write set collected so far.
    pub fn rwset(&self) -> &ReadWriteSet {
        &self.rwset
    }
}

impl ChaincodeStub for TransactionContext<'_> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn tx_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn creator(&self) -> Result<String, IdentityError> {
        if self.creator.is_empty() {
            return Err(IdentityError::Missing);
        }
        Ok(self.creator.clone())
    }

    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let committed = self.ledger.committed(key);
        self.rwset
            .record_read(key, committed.as_ref().map(|v| v.version));
        trace!(tx_id = %self.tx_id, found = committed.is_some(), "get_state");
        Ok(committed.map(|v| v.value))
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        if key.is_empty() {
            return Err(LedgerError::Storage("key must not be empty".to_string()));
        }
        self.rwset.record_write(key, value);
        Ok(())
    }

    fn get_state_by_partial_composite_key(
        &mut self,
        index: &str,
        components: &[&str],
    ) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        let partial = CompositeKey::partial(index, components)?;
        let start = partial.as_str().to_string();
        let end = partial.range_end();

        let entries = self.ledger.committed_range(&start, &end);
        self.rwset.record_range(RangeRead {
            start,
            end,
            results: entries.iter().map(|(k, v)| (k.clone(), v.version)).collect(),
        });
        Ok(entries.into_iter().map(|(k, v)| (k, v.value)).collect())
    }

    fn get_history_for_key(&self, key: &str) -> Result<Vec<KeyModification>, LedgerError> {
        Ok(self.ledger.history(key))
    }
}
