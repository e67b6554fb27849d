//! # Carton Ledger
//!
//! Creation spawns the carton record and its whole package set in the same
//! invocation, so they commit together. After that only the owner field of
//! a carton ever changes.

use super::packages::create_package;
use super::{read_json, write_json};
use crate::domain::{
    carton_key, Carton, ChaincodeConfig, CreateCartonResponse, IdSequence, NewCarton, Package,
};
use crate::errors::{ChaincodeError, Result};
use cf_shared_types::ChaincodeStub;
use tracing::{debug, info};

/// Create a carton produced by `producer` together with its packages.
///
/// The carton id is the first id of the invocation's [`IdSequence`];
/// package ids follow. Production date is the transaction timestamp.
pub fn create_carton<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    config: &ChaincodeConfig,
    producer: &str,
    draft: NewCarton,
) -> Result<CreateCartonResponse> {
    if draft.package_num > config.max_packages_per_carton {
        return Err(ChaincodeError::MalformedInput(format!(
            "packageNum {} exceeds the limit of {}",
            draft.package_num, config.max_packages_per_carton
        )));
    }

    let mut ids = IdSequence::new(stub.tx_id());
    let carton = Carton {
        id: ids.next_id(),
        name: draft.name,
        production_date: stub.tx_timestamp(),
        description: draft.description,
        package_num: draft.package_num,
        producer: producer.to_string(),
        owner: producer.to_string(),
    };

    let key = carton_key(&carton.id)?;
    if stub.get_state(key.as_str())?.is_some() {
        return Err(ChaincodeError::AlreadyExists {
            entity: "Carton",
            id: carton.id,
        });
    }
    write_json(stub, key.as_str(), &carton)?;

    let mut packages = Vec::with_capacity(carton.package_num as usize);
    for _ in 0..carton.package_num {
        let package = Package::new(ids.next_id());
        create_package(stub, &carton.id, &package)?;
        packages.push(package);
    }

    info!(
        carton_id = %carton.id,
        producer = %carton.producer,
        packages = packages.len(),
        "carton created"
    );
    Ok(CreateCartonResponse { carton, packages })
}

/// Current carton record.
pub fn get_carton<S: ChaincodeStub + ?Sized>(stub: &mut S, carton_id: &str) -> Result<Carton> {
    let key = carton_key(carton_id)?;
    let carton = read_json(stub, key.as_str())?
        .ok_or_else(|| ChaincodeError::carton_not_found(carton_id))?;
    debug!(carton_id, "carton read");
    Ok(carton)
}

/// Reassign the carton's owner and rewrite the full record.
///
/// No authorization happens here; see `transfer::sell_carton`.
pub fn update_carton_owner<S: ChaincodeStub + ?Sized>(
    stub: &mut S,
    carton_id: &str,
    new_owner: &str,
) -> Result<Carton> {
    let mut carton = get_carton(stub, carton_id)?;
    carton.owner = new_owner.to_string();
    let key = carton_key(carton_id)?;
    write_json(stub, key.as_str(), &carton)?;
    Ok(carton)
}
