//! Adapters Layer - the in-memory substrate and its transaction context.

pub mod context;
pub mod memory_ledger;

pub use context::TransactionContext;
pub use memory_ledger::InMemoryLedger;
