//! Settings Store: one singleton record, written once by `init`.

use super::read_json;
use crate::domain::{Settings, KEY_SETTINGS};
use crate::errors::{ChaincodeError, Result};
use cf_shared_types::ChaincodeStub;
use tracing::info;

/// Store the settings carried by the `init` argument.
///
/// The argument must decode as [`Settings`]; the raw argument bytes are
/// what gets stored. Fails with `AlreadyInitialized` once settings exist.
pub fn initialize<S: ChaincodeStub + ?Sized>(stub: &mut S, raw: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(raw)
        .map_err(|err| ChaincodeError::MalformedInput(format!("Error parsing settings json: {err}")))?;

    if stub.get_state(KEY_SETTINGS)?.is_some() {
        return Err(ChaincodeError::AlreadyInitialized);
    }

    stub.put_state(KEY_SETTINGS, raw.as_bytes().to_vec())?;
    info!(admin = %settings.admin, "settings initialized");
    Ok(settings)
}

/// Stored settings bytes, exactly as written by `init`. Empty before `init`.
pub fn read_raw<S: ChaincodeStub + ?Sized>(stub: &mut S) -> Result<Vec<u8>> {
    Ok(stub.get_state(KEY_SETTINGS)?.unwrap_or_default())
}

/// Stored settings, decoded.
pub fn get_settings<S: ChaincodeStub + ?Sized>(stub: &mut S) -> Result<Settings> {
    read_json(stub, KEY_SETTINGS)?.ok_or_else(|| ChaincodeError::NotFound {
        entity: "settings",
        id: KEY_SETTINGS.to_string(),
    })
}
