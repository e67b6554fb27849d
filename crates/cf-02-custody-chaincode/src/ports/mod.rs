//! # Ports Layer
//!
//! - **Driving Port (Inbound)**: `Chaincode`, the init/invoke entry points
//! - **Driven Port (Outbound)**: `ChaincodeStub`, the ledger substrate

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
