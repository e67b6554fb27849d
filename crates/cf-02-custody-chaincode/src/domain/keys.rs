//! # Key Space Conventions
//!
//! Index namespaces and key builders for every record kind. Every record
//! lives in the one shared key space; only the index separates them.
//!
//! | Record | Key |
//! |--------|-----|
//! | Settings | `__settings` (simple key) |
//! | User | `(cn~<role>, name)` |
//! | Carton | `(cn~carton, cartonId)` |
//! | Package | `(cn~package, cartonId, packageId)` |

use super::entities::Role;
use cf_shared_types::{CompositeKey, KeyError};

/// Simple key of the singleton settings record.
pub const KEY_SETTINGS: &str = "__settings";

pub const INDEX_PRODUCER: &str = "cn~producer";
pub const INDEX_PHARMACY: &str = "cn~pharmacy";
pub const INDEX_RESELLER: &str = "cn~reseller";
pub const INDEX_CARTON: &str = "cn~carton";
pub const INDEX_PACKAGE: &str = "cn~package";

/// Key of a carton record.
pub fn carton_key(carton_id: &str) -> Result<CompositeKey, KeyError> {
    CompositeKey::new(INDEX_CARTON, &[carton_id])
}

/// Key of a package record, scoped under its carton.
pub fn package_key(carton_id: &str, package_id: &str) -> Result<CompositeKey, KeyError> {
    CompositeKey::new(INDEX_PACKAGE, &[carton_id, package_id])
}

/// Key of a registry entry.
pub fn user_key(role: Role, name: &str) -> Result<CompositeKey, KeyError> {
    CompositeKey::new(role.index(), &[name])
}
