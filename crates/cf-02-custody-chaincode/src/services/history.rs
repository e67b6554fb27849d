//! # Provenance History
//!
//! Projects the carton key's revision log into chain-of-custody entries.
//! Entries keep the substrate's order; nothing is re-sorted here. With the
//! in-memory substrate that order is oldest-first.

use super::cartons::get_carton;
use super::packages::get_package;
use crate::domain::{carton_key, HistoryEntry, PackageHistoryResponse, PackageRef};
use crate::errors::Result;
use cf_shared_types::ChaincodeStub;
use tracing::debug;

/// One entry per committed write to the carton's key.
pub fn get_history<S: ChaincodeStub + ?Sized>(stub: &S, carton_id: &str) -> Result<Vec<HistoryEntry>> {
    let key = carton_key(carton_id)?;
    let entries: Vec<HistoryEntry> = stub
        .get_history_for_key(key.as_str())?
        .into_iter()
        .map(|modification| HistoryEntry {
            snapshot: String::from_utf8_lossy(&modification.value).into_owned(),
            tx_id: modification.tx_id,
            timestamp: modification.timestamp.timestamp(),
        })
        .collect();
    debug!(carton_id, revisions = entries.len(), "carton history read");
    Ok(entries)
}

/// Current carton, current package and the carton's custody history.
pub fn get_package_history<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    request: &PackageRef,
) -> Result<PackageHistoryResponse> {
    let carton = get_carton(stub, &request.carton_id)?;
    let package = get_package(stub, &request.carton_id, &request.package_id)?;
    let owner_history = get_history(&*stub, &request.carton_id)?;
    Ok(PackageHistoryResponse {
        carton,
        package,
        owner_history,
    })
}
