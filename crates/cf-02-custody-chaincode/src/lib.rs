//! # cf-02-custody-chaincode
//!
//! Chain-of-custody chaincode for pharmaceutical cartons and packages.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Key Space | `domain/keys.rs` | Index namespaces and composite key builders |
//! | Role Registry | `services/registry.rs` | Producer, pharmacy and reseller identities |
//! | Settings Store | `services/settings.rs` | Singleton admin record written by `init` |
//! | Carton Ledger | `services/cartons.rs` | Carton creation with its package set, owner updates |
//! | Package Ledger | `services/packages.rs` | Package reads, sale marking, per-carton listing |
//! | Ownership Transfer | `services/transfer.rs`, `domain/custody.rs` | Owner-authorized carton and package sales |
//! | Provenance History | `services/history.rs` | Carton revision log projected into custody entries |
//! | Dispatch | `operation.rs`, `service.rs` | Closed operation set, error to response conversion |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | A carton's package set is created once, with it, and has exactly `packageNum` members | `services/cartons.rs` - `create_carton()` |
//! | INVARIANT-2 | `owner` starts equal to `producer` | `services/cartons.rs` - `create_carton()` |
//! | INVARIANT-3 | Only the current owner may sell a carton or any of its packages | `domain/custody.rs` - `authorize()` |
//! | INVARIANT-4 | Packages carry no owner | `domain/entities.rs` - `Package` |
//! | INVARIANT-5 | Ids are a pure function of the transaction id | `domain/ids.rs` - `derive_id()` |
//! | INVARIANT-6 | Settings are written once | `services/settings.rs` - `initialize()` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use cf_01_ledger_substrate::InMemoryLedger;
//! use cf_02_custody_chaincode::prelude::*;
//!
//! let ledger = InMemoryLedger::new();
//! let chaincode = CustodyChaincode::default();
//!
//! let args = vec![r#"{"name":"Batch1","description":"d","packageNum":3}"#.to_string()];
//! let response = ledger.execute("P1", |stub| chaincode.invoke(stub, "createCarton", &args));
//! let created: CreateCartonResponse = response.payload_json()?;
//! ```

#![warn(missing_debug_implementations)]

pub mod domain;
pub mod errors;
pub mod operation;
pub mod ports;
pub mod service;
pub mod services;

pub use domain::*;
pub use errors::{ChaincodeError, Result};
pub use operation::Operation;
pub use ports::Chaincode;
pub use service::CustodyChaincode;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::domain::{
        Carton, CartonLookup, CartonRef, ChaincodeConfig, CreateCartonResponse, HistoryEntry,
        NewCarton, Package, PackageHistoryResponse, PackageRef, Role, Settings, User, UserRef,
    };
    pub use crate::errors::ChaincodeError;
    pub use crate::operation::Operation;
    pub use crate::ports::Chaincode;
    pub use crate::service::CustodyChaincode;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Custody Chaincode";
