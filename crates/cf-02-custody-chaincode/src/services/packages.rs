//! # Package Ledger
//!
//! Packages live at `(cn~package, cartonId, packageId)` and carry only a
//! sold flag and sale time. Custody checks happen in `transfer`.

use super::{read_json, write_json};
use crate::domain::{package_key, Package, INDEX_PACKAGE};
use crate::errors::{ChaincodeError, Result};
use cf_shared_types::ChaincodeStub;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Stage a package record under its carton.
pub fn create_package<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    carton_id: &str,
    package: &Package,
) -> Result<()> {
    let key = package_key(carton_id, &package.id)?;
    write_json(stub, key.as_str(), package)
}

/// Current package record.
pub fn get_package<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    carton_id: &str,
    package_id: &str,
) -> Result<Package> {
    let key = package_key(carton_id, package_id)?;
    let package = read_json(stub, key.as_str())?
        .ok_or_else(|| ChaincodeError::package_not_found(carton_id, package_id))?;
    debug!(carton_id, package_id, "package read");
    Ok(package)
}

/// Mark a package sold at `sale_time`.
///
/// An already sold package is sold again: the sale time is overwritten.
pub fn mark_package_sold<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    carton_id: &str,
    package_id: &str,
    sale_time: DateTime<Utc>,
) -> Result<Package> {
    let mut package = get_package(stub, carton_id, package_id)?;
    if package.sold {
        info!(carton_id, package_id, "package already sold, overwriting sale time");
    }
    package.sold = true;
    package.sell_date = Some(sale_time);

    let key = package_key(carton_id, package_id)?;
    write_json(stub, key.as_str(), &package)?;
    Ok(package)
}

/// Every package of a carton, in package key order.
pub fn list_packages<S: ChaincodeStub + ?Sized>(stub: &mut S, carton_id: &str) -> Result<Vec<Package>> {
    stub.get_state_by_partial_composite_key(INDEX_PACKAGE, &[carton_id])?
        .into_iter()
        .map(|(_, bytes)| serde_json::from_slice(&bytes).map_err(ChaincodeError::from))
        .collect()
}
