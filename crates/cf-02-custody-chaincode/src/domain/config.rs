//! Chaincode configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use cf_02_custody_chaincode::domain::ChaincodeConfig;
//!
//! let config = ChaincodeConfig::default().with_max_packages_per_carton(500);
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling for `max_packages_per_carton`.
pub const PACKAGE_LIMIT_CEILING: u32 = 1_000_000;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_packages_per_carton must be between 1 and {ceiling}, got {value}")]
    PackageLimitOutOfRange { value: u32, ceiling: u32 },
}

/// Chaincode configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeConfig {
    /// Largest `packageNum` accepted by `createCarton`.
    pub max_packages_per_carton: u32,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            max_packages_per_carton: 10_000,
        }
    }
}

impl ChaincodeConfig {
    /// Validate bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_packages_per_carton == 0 || self.max_packages_per_carton > PACKAGE_LIMIT_CEILING
        {
            return Err(ConfigError::PackageLimitOutOfRange {
                value: self.max_packages_per_carton,
                ceiling: PACKAGE_LIMIT_CEILING,
            });
        }
        Ok(())
    }

    /// Builder-style method to set the package limit
    pub fn with_max_packages_per_carton(mut self, max: u32) -> Self {
        self.max_packages_per_carton = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ChaincodeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = ChaincodeConfig::default().with_max_packages_per_carton(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PackageLimitOutOfRange { value: 0, .. })
        ));
    }
}
