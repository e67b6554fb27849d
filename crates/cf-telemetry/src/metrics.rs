//! Prometheus metrics for Counterfight.
//!
//! All metrics follow the naming convention: `cf_<component>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., custody_transfers_total)
//! - **Gauge**: Value that can go up or down (e.g., ledger_height)
//! - **Histogram**: Distribution of values (e.g., invocation_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

/// Buckets for invocation latency, 100us to ~1.6s.
const DURATION_BUCKETS: &[f64] = &[
    0.0001, 0.0002, 0.0004, 0.0008, 0.0016, 0.0032, 0.0064, 0.0128, 0.0256, 0.0512, 0.1024,
    0.2048, 0.4096, 0.8192, 1.6384,
];

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // CHAINCODE METRICS
    // =========================================================================

    /// Invocations by operation and outcome
    pub static ref CHAINCODE_INVOCATIONS: CounterVec = CounterVec::new(
        Opts::new("cf_chaincode_invocations_total", "Chaincode invocations"),
        &["operation", "status"]  // status: ok/error
    ).expect("metric creation failed");

    /// Invocation duration histogram
    pub static ref INVOCATION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "cf_chaincode_invocation_duration_seconds",
            "Time spent executing and committing an invocation"
        ).buckets(DURATION_BUCKETS.to_vec()),
        &["operation"]
    ).expect("metric creation failed");

    // =========================================================================
    // CUSTODY METRICS
    // =========================================================================

    /// Cartons created
    pub static ref CARTONS_CREATED: Counter = Counter::new(
        "cf_custody_cartons_created_total",
        "Total number of cartons created"
    ).expect("metric creation failed");

    /// Carton custody transfers
    pub static ref CUSTODY_TRANSFERS: Counter = Counter::new(
        "cf_custody_transfers_total",
        "Total number of committed carton custody transfers"
    ).expect("metric creation failed");

    /// Packages sold
    pub static ref PACKAGES_SOLD: Counter = Counter::new(
        "cf_custody_packages_sold_total",
        "Total number of committed package sales"
    ).expect("metric creation failed");

    // =========================================================================
    // LEDGER METRICS
    // =========================================================================

    /// Commits rejected by read-set validation
    pub static ref MVCC_CONFLICTS: Counter = Counter::new(
        "cf_ledger_mvcc_conflicts_total",
        "Transactions invalidated by an MVCC read conflict"
    ).expect("metric creation failed");

    /// Current ledger height
    pub static ref LEDGER_HEIGHT: Gauge = Gauge::new(
        "cf_ledger_height",
        "Version of the last committed write transaction"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; metrics already registered are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Chaincode
        Box::new(CHAINCODE_INVOCATIONS.clone()),
        Box::new(INVOCATION_DURATION.clone()),
        // Custody
        Box::new(CARTONS_CREATED.clone()),
        Box::new(CUSTODY_TRANSFERS.clone()),
        Box::new(PACKAGES_SOLD.clone()),
        // Ledger
        Box::new(MVCC_CONFLICTS.clone()),
        Box::new(LEDGER_HEIGHT.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Record the outcome of one invocation.
pub fn record_invocation(operation: &str, ok: bool, duration_secs: f64) {
    let status = if ok { "ok" } else { "error" };
    CHAINCODE_INVOCATIONS
        .with_label_values(&[operation, status])
        .inc();
    INVOCATION_DURATION
        .with_label_values(&[operation])
        .observe(duration_secs);
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
