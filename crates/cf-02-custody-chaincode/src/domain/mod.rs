//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Ledger records and request payloads
//! - Key space conventions (index namespaces)
//! - Deterministic id derivation
//! - Custody (ownership) authorization
//! - Configuration
//!
//! RULES:
//! - No substrate access
//! - Pure functions where possible

pub mod config;
pub mod custody;
pub mod entities;
pub mod ids;
pub mod keys;

pub use config::{ChaincodeConfig, ConfigError};
pub use custody::Custody;
pub use entities::*;
pub use ids::{derive_id, IdSequence};
pub use keys::*;
