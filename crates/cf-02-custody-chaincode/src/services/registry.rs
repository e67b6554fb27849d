//! # Role Registry
//!
//! Identities registered under one of three roles, keyed by
//! `(cn~<role>, name)`. Existence is presence of the key. Re-registering
//! overwrites the entry without complaint.

use super::write_json;
use crate::domain::{user_key, Role, User};
use crate::errors::Result;
use cf_shared_types::ChaincodeStub;
use tracing::{debug, info};

/// Register `name` under `role`.
///
/// Fails with `UnknownRole` for a role outside producer, pharmacy and
/// reseller.
pub fn register_user<S: ChaincodeStub + ?Sized>(stub: &mut S, name: &str, role: &str) -> Result<User> {
    let role: Role = role.parse()?;
    let key = user_key(role, name)?;
    let user = User {
        role,
        name: name.to_string(),
    };
    write_json(stub, key.as_str(), &user)?;
    info!(name, role = %role, "user registered");
    Ok(user)
}

/// Whether `name` is registered under `role`.
///
/// Any failure, an unknown role included, answers `false`.
pub fn user_exists<S: ChaincodeStub + ?Sized>(stub: &mut S, name: &str, role: &str) -> bool {
    let Ok(role) = role.parse::<Role>() else {
        return false;
    };
    let Ok(key) = user_key(role, name) else {
        return false;
    };
    let exists = matches!(stub.get_state(key.as_str()), Ok(Some(_)));
    debug!(name, role = %role, exists, "user lookup");
    exists
}
