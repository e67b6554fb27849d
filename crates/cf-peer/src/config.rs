//! # Peer Configuration
//!
//! Unified configuration for the host: telemetry, chaincode limits and
//! output format. Defaults, then environment, then CLI flags.

use cf_02_custody_chaincode::{ChaincodeConfig, ConfigError};
use cf_telemetry::TelemetryConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;

/// How responses are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON, one document per response.
    #[default]
    Pretty,
    /// One JSON line per response.
    Compact,
}

/// Complete peer configuration.
#[derive(Debug, Clone, Default)]
pub struct PeerConfig {
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
    /// Chaincode configuration.
    pub chaincode: ChaincodeConfig,
    /// Response output format.
    pub output: OutputFormat,
}

impl PeerConfig {
    /// Load configuration from the process environment.
    ///
    /// - `CF_MAX_PACKAGES`: package limit per carton
    /// - `CF_OUTPUT`: `pretty` or `compact`
    /// - telemetry variables, see [`TelemetryConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(max) = lookup("CF_MAX_PACKAGES").and_then(|v| v.parse().ok()) {
            config.chaincode.max_packages_per_carton = max;
        }
        if let Some(output) = lookup("CF_OUTPUT").and_then(|v| OutputFormat::from_str(&v, true).ok()) {
            config.output = output;
        }
        config
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chaincode.validate()
    }
}
