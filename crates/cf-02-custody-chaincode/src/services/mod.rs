//! # Chaincode Services
//!
//! Business logic for each component, written against the
//! [`ChaincodeStub`](cf_shared_types::ChaincodeStub) port only. Every
//! function here runs inside one invocation's transaction context and
//! either returns a value or an error; the caller decides whether the
//! invocation's writes commit.
//!
//! | Module | Component |
//! |--------|-----------|
//! | `settings` | Settings Store |
//! | `registry` | Role Registry |
//! | `cartons` | Carton Ledger |
//! | `packages` | Package Ledger |
//! | `transfer` | Ownership Transfer State Machine |
//! | `history` | Provenance History Reconstructor |

pub mod cartons;
pub mod history;
pub mod packages;
pub mod registry;
pub mod settings;
pub mod transfer;

pub use cartons::{create_carton, get_carton, update_carton_owner};
pub use history::{get_history, get_package_history};
pub use packages::{create_package, get_package, list_packages, mark_package_sold};
pub use registry::{register_user, user_exists};
pub use settings::{get_settings, initialize, read_raw};
pub use transfer::{sell_carton, sell_package};

use crate::errors::Result;
use cf_shared_types::ChaincodeStub;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and decode a JSON record. `Ok(None)` when the key is absent.
pub(crate) fn read_json<S, T>(stub: &mut S, key: &str) -> Result<Option<T>>
where
    S: ChaincodeStub + ?Sized,
    T: DeserializeOwned,
{
    match stub.get_state(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Encode and stage a JSON record.
pub(crate) fn write_json<S, T>(stub: &mut S, key: &str, record: &T) -> Result<()>
where
    S: ChaincodeStub + ?Sized,
    T: Serialize,
{
    let bytes = serde_json::to_vec(record)?;
    stub.put_state(key, bytes)?;
    Ok(())
}
