//! # Ownership Transfer
//!
//! Both sales are authorized against the carton's current custodian. A
//! carton sale touches only the carton record; a package sale touches only
//! the package record.

use super::cartons::{get_carton, update_carton_owner};
use super::packages::mark_package_sold;
use crate::domain::{Carton, CartonRef, Custody, Package, PackageRef};
use crate::errors::Result;
use cf_shared_types::ChaincodeStub;
use tracing::{info, warn};

/// Transfer custody of a carton from `caller` to the request's buyer.
pub fn sell_carton<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    caller: &str,
    request: &CartonRef,
) -> Result<Carton> {
    let carton = get_carton(stub, &request.carton_id)?;
    let next = Custody::of(&carton)
        .transfer(caller, &request.buyer)
        .inspect_err(|_| {
            warn!(carton_id = %request.carton_id, caller, owner = %carton.owner, "carton sale refused");
        })?;

    let carton = update_carton_owner(stub, &request.carton_id, next.owner())?;
    info!(
        carton_id = %carton.id,
        from = caller,
        to = %carton.owner,
        "carton custody transferred"
    );
    Ok(carton)
}

/// Sell one package of a carton owned by `caller`.
pub fn sell_package<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    caller: &str,
    request: &PackageRef,
) -> Result<Package> {
    let carton = get_carton(stub, &request.carton_id)?;
    Custody::of(&carton).authorize(caller).inspect_err(|_| {
        warn!(carton_id = %request.carton_id, caller, owner = %carton.owner, "package sale refused");
    })?;

    let sale_time = stub.tx_timestamp();
    let package = mark_package_sold(stub, &request.carton_id, &request.package_id, sale_time)?;
    info!(
        carton_id = %request.carton_id,
        package_id = %request.package_id,
        seller = caller,
        "package sold"
    );
    Ok(package)
}
