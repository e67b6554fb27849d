//! # Error Types
//!
//! All errors a chaincode operation can fail with. Every variant is turned
//! into a failure `Response` at the operation boundary; nothing is retried.

use cf_shared_types::{IdentityError, KeyError, LedgerError};
use thiserror::Error;

/// Result alias for chaincode operations.
pub type Result<T> = std::result::Result<T, ChaincodeError>;

/// Errors raised by chaincode operations.
#[derive(Debug, Error)]
pub enum ChaincodeError {
    /// Wrong argument count, undecodable argument JSON, or an id that
    /// cannot be used as a key component.
    #[error("{0}")]
    MalformedInput(String),

    /// Operation name outside the dispatch table.
    #[error("Incorrect function name: {0}")]
    UnknownOperation(String),

    /// Carton, package or settings record absent.
    #[error("No {entity} for {id}")]
    NotFound { entity: &'static str, id: String },

    /// Caller is not the carton's current owner.
    #[error("Carton doesn't belong to you!")]
    NotAuthorized { caller: String, owner: String },

    /// Role outside producer, pharmacy, reseller.
    #[error("Unknown user role: {0}")]
    UnknownRole(String),

    /// Caller identity could not be resolved.
    #[error("Error extracting user identity: {0}")]
    Identity(#[from] IdentityError),

    /// Substrate read, write or history query failed.
    #[error("Storage error: {0}")]
    Storage(LedgerError),

    /// Record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings were already written by a previous `init`.
    #[error("Chaincode already initialized")]
    AlreadyInitialized,

    /// A derived id is already taken on the ledger.
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },
}

impl ChaincodeError {
    /// Short label, stable across message changes. Used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::UnknownOperation(_) => "unknown_operation",
            Self::NotFound { .. } => "not_found",
            Self::NotAuthorized { .. } => "not_authorized",
            Self::UnknownRole(_) => "unknown_role",
            Self::Identity(_) => "identity",
            Self::Storage(_) => "storage",
            Self::Serialization(_) => "serialization",
            Self::AlreadyInitialized => "already_initialized",
            Self::AlreadyExists { .. } => "already_exists",
        }
    }

    pub(crate) fn carton_not_found(carton_id: &str) -> Self {
        Self::NotFound {
            entity: "Carton",
            id: carton_id.to_string(),
        }
    }

    pub(crate) fn package_not_found(carton_id: &str, package_id: &str) -> Self {
        Self::NotFound {
            entity: "package",
            id: format!("{carton_id}:{package_id}"),
        }
    }
}

impl From<KeyError> for ChaincodeError {
    fn from(err: KeyError) -> Self {
        Self::MalformedInput(format!("Invalid key: {err}"))
    }
}

impl From<LedgerError> for ChaincodeError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidKey(key_err) => key_err.into(),
            other => Self::Storage(other),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_authorized_message_is_fixed() {
        let err = ChaincodeError::NotAuthorized {
            caller: "R2".to_string(),
            owner: "P1".to_string(),
        };
        assert_eq!(err.to_string(), "Carton doesn't belong to you!");
        assert_eq!(err.kind(), "not_authorized");
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ChaincodeError::carton_not_found("42").to_string(),
            "No Carton for 42"
        );
        assert_eq!(
            ChaincodeError::package_not_found("42", "7").to_string(),
            "No package for 42:7"
        );
    }

    #[test]
    fn test_key_errors_are_malformed_input() {
        let key_err = KeyError::InvalidComponent {
            component: "a\0b".to_string(),
            rune: 0,
        };
        let direct = ChaincodeError::from(key_err.clone());
        let via_ledger = ChaincodeError::from(LedgerError::InvalidKey(key_err));
        assert_eq!(direct.kind(), "malformed_input");
        assert_eq!(via_ledger.kind(), "malformed_input");
        assert_eq!(direct.to_string(), via_ledger.to_string());
        assert!(direct.to_string().starts_with("Invalid key: "));

        let storage = ChaincodeError::from(LedgerError::Storage("disk".to_string()));
        assert_eq!(storage.kind(), "storage");
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = ChaincodeError::UnknownOperation("burnCarton".to_string());
        assert_eq!(err.to_string(), "Incorrect function name: burnCarton");
    }
}
