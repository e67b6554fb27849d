//! # Counterfight Telemetry
//!
//! Structured logging and Prometheus metrics for the custody chaincode host.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cf_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `counterfight` | Service name in logs |
//! | `CF_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CF_JSON_LOGS` | `false` | JSON log lines (defaults on inside containers) |
//! | `CF_CONSOLE_OUTPUT` | `true` | Write logs to the console |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, record_invocation, register_metrics, CARTONS_CREATED, CHAINCODE_INVOCATIONS,
    CUSTODY_TRANSFERS, INVOCATION_DURATION, LEDGER_HEIGHT, MVCC_CONFLICTS, PACKAGES_SOLD, REGISTRY,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register metrics, then install the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}
