//! # Counterfight Peer
//!
//! Host process for the custody chaincode.
//!
//! ## Modular Structure
//!
//! - `config` - Peer configuration from defaults, environment and flags
//! - `script` - Invocation script format and loading
//! - `runtime` - One transaction per invocation over the in-memory ledger
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, env, CLI flags)
//! 2. Initialize telemetry (metrics registry, log subscriber)
//! 3. Build the ledger and chaincode
//! 4. Replay the script and print each outcome

pub mod config;
pub mod runtime;
pub mod script;

pub use config::{OutputFormat, PeerConfig};
pub use runtime::{InvocationOutcome, PeerRuntime};
pub use script::{load_script, parse_script, Invocation};
