//! # Read/Write Sets
//!
//! Collected by a transaction context while the chaincode runs and
//! validated against committed state at commit time (optimistic
//! concurrency control).
//!
//! - A point read records the version observed (or `None` if absent).
//! - A range read records the bounds and every `(key, version)` returned,
//!   so that a key inserted into the range by another writer (phantom) is
//!   detected as well as a changed one.
//! - Writes are buffered; the last write to a key wins.

use super::versioned::{Version, VersionedValue};
use std::collections::BTreeMap;

/// A range query executed during the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRead {
    /// Inclusive lower bound.
    pub start: String,
    /// Exclusive upper bound.
    pub end: String,
    /// Keys and versions returned, in key order.
    pub results: Vec<(String, Version)>,
}

/// Read and write sets of one transaction.
#[derive(Debug, Clone, Default)]
pub struct ReadWriteSet {
    reads: BTreeMap<String, Option<Version>>,
    range_reads: Vec<RangeRead>,
    writes: BTreeMap<String, Vec<u8>>,
}

impl ReadWriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point read. Only the first observation of a key is kept.
    pub fn record_read(&mut self, key: &str, version: Option<Version>) {
        self.reads.entry(key.to_string()).or_insert(version);
    }

    /// Record a range read.
    pub fn record_range(&mut self, range: RangeRead) {
        self.range_reads.push(range);
    }

    /// Buffer a write.
    pub fn record_write(&mut self, key: &str, value: Vec<u8>) {
        self.writes.insert(key.to_string(), value);
    }

    /// Buffered writes in key order.
    pub fn writes(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.writes
    }

    /// Consume into buffered writes.
    pub fn into_writes(self) -> BTreeMap<String, Vec<u8>> {
        self.writes
    }

    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty()
    }

    /// Validate the read set against committed state.
    ///
    /// Returns the first key whose committed version differs from what the
    /// transaction observed.
    pub fn validate(&self, world: &BTreeMap<String, VersionedValue>) -> Result<(), String> {
        for (key, observed) in &self.reads {
            let current = world.get(key).map(|v| v.version);
            if current != *observed {
                return Err(key.clone());
            }
        }

        for range in &self.range_reads {
            let current: Vec<(String, Version)> = world
                .range(range.start.clone()..range.end.clone())
                .map(|(k, v)| (k.clone(), v.version))
                .collect();
            if current != range.results {
                let culprit = first_divergence(&range.results, &current)
                    .unwrap_or_else(|| range.start.clone());
                return Err(culprit);
            }
        }

        Ok(())
    }
}

fn first_divergence(
    observed: &[(String, Version)],
    current: &[(String, Version)],
) -> Option<String> {
    observed
        .iter()
        .zip(current.iter())
        .find(|(a, b)| a != b)
        .map(|(_, b)| b.0.clone())
        .or_else(|| {
            // One side is a prefix of the other: the extra entry diverges.
            let longer = if observed.len() > current.len() { observed } else { current };
            longer.get(observed.len().min(current.len())).map(|(k, _)| k.clone())
        })
}

// =============================================================================
// TESTS
// =============================================================================
