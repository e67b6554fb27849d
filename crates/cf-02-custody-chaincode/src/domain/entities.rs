//! # Domain Entities
//!
//! Ledger records and the JSON payloads exchanged with callers. Field names
//! on the wire are camelCase.
//!
//! ## Ownership Model
//!
//! - `Carton.owner` is the only custody field in the system
//! - `Package` has no owner: custody of a package is its carton's owner
//! - `Package` never stores its carton id; it is addressed by the
//!   `(cartonId, packageId)` composite key only

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::keys::{INDEX_PHARMACY, INDEX_PRODUCER, INDEX_RESELLER};
use crate::errors::ChaincodeError;

// =============================================================================
// SETTINGS & REGISTRY
// =============================================================================

/// Singleton configuration record, written once by `init`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub admin: String,
}

/// Registry roles. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Producer,
    Pharmacy,
    Reseller,
}

impl Role {
    /// Index namespace of this role's registry entries.
    pub fn index(self) -> &'static str {
        match self {
            Role::Producer => INDEX_PRODUCER,
            Role::Pharmacy => INDEX_PHARMACY,
            Role::Reseller => INDEX_RESELLER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Producer => "producer",
            Role::Pharmacy => "pharmacy",
            Role::Reseller => "reseller",
        }
    }
}

impl FromStr for Role {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "producer" => Ok(Role::Producer),
            "pharmacy" => Ok(Role::Pharmacy),
            "reseller" => Ok(Role::Reseller),
            other => Err(ChaincodeError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry entry. Presence of the key is what matters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub role: Role,
    pub name: String,
}

// =============================================================================
// CARTONS & PACKAGES
// =============================================================================

/// Top-level tracked distribution unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carton {
    pub id: String,
    pub name: String,
    /// Commit time of the creating transaction.
    pub production_date: DateTime<Utc>,
    pub description: String,
    /// Size of the package set. Fixed at creation.
    pub package_num: u32,
    /// Creator identity. Fixed at creation.
    pub producer: String,
    /// Current custodian. Starts equal to `producer`.
    pub owner: String,
}

/// Individually sold unit inside a carton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub sold: bool,
    /// Commit time of the last sale; `None` until sold.
    pub sell_date: Option<DateTime<Utc>>,
}

impl Package {
    /// Fresh, unsold package.
    pub fn new(id: String) -> Self {
        Self {
            id,
            sold: false,
            sell_date: None,
        }
    }
}

/// One revision of a carton record, projected from the substrate's
/// revision log.
///
/// `snapshot` is the whole stored carton state at that revision. It is
/// serialized under the name `owner` for wire compatibility with existing
/// clients, although it is not an isolated owner value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(rename = "owner")]
    pub snapshot: String,
    pub tx_id: String,
    /// Commit time in Unix seconds.
    #[serde(rename = "timeStamp")]
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Decode the snapshot as a carton, if it is one.
    pub fn carton(&self) -> Option<Carton> {
        serde_json::from_str(&self.snapshot).ok()
    }
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// `createCarton` argument. Caller-supplied id, producer, owner and
/// production date are ignored; they are assigned by the chaincode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCarton {
    pub name: String,
    pub description: String,
    pub package_num: u32,
}

/// `sellCarton` argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartonRef {
    pub carton_id: String,
    pub buyer: String,
}

/// `sellPackage`, `getPackage` and `getPackageHistory` argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRef {
    pub carton_id: String,
    pub package_id: String,
}

/// `getCarton` and `getCartonPackages` argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartonLookup {
    pub carton_id: String,
}

/// `userExists` argument. The role stays a raw string so that an unknown
/// role answers `false` instead of failing to decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    pub role: String,
}

// =============================================================================
// RESPONSE PAYLOADS
// =============================================================================

/// `createCarton` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCartonResponse {
    pub carton: Carton,
    pub packages: Vec<Package>,
}

/// `getPackageHistory` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageHistoryResponse {
    pub carton: Carton,
    pub package: Package,
    pub owner_history: Vec<HistoryEntry>,
}

// =============================================================================
// TESTS
// =============================================================================
