//! # Custody Chaincode Service
//!
//! Implements the [`Chaincode`] entry points: parse the operation, resolve
//! the caller, run the matching service and turn the outcome into a
//! [`Response`]. Every error is converted at this boundary; nothing is
//! retried.

use crate::domain::{ChaincodeConfig, ConfigError};
use crate::errors::{ChaincodeError, Result};
use crate::operation::Operation;
use crate::ports::inbound::Chaincode;
use crate::services;
use cf_shared_types::{ChaincodeStub, Response};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Chain-of-custody chaincode.
#[derive(Debug, Clone, Default)]
pub struct CustodyChaincode {
    config: ChaincodeConfig,
}

impl CustodyChaincode {
    /// Create a chaincode with a validated configuration.
    pub fn new(config: ChaincodeConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Run a parsed operation and return its success payload.
    pub fn execute(&self, stub: &mut dyn ChaincodeStub, operation: Operation) -> Result<Vec<u8>> {
        match operation {
            Operation::Info => services::read_raw(stub),
            Operation::CreateUser { role } => {
                let caller = stub.creator()?;
                services::register_user(stub, &caller, &role)?;
                Ok(Vec::new())
            }
            Operation::CreateCarton(draft) => {
                let caller = stub.creator()?;
                to_payload(&services::create_carton(stub, &self.config, &caller, draft)?)
            }
            Operation::SellCarton(request) => {
                let caller = stub.creator()?;
                services::sell_carton(stub, &caller, &request)?;
                Ok(Vec::new())
            }
            Operation::SellPackage(request) => {
                let caller = stub.creator()?;
                services::sell_package(stub, &caller, &request)?;
                Ok(Vec::new())
            }
            Operation::GetPackageHistory(request) => {
                to_payload(&services::get_package_history(stub, &request)?)
            }
            Operation::GetCarton(lookup) => {
                to_payload(&services::get_carton(stub, &lookup.carton_id)?)
            }
            Operation::GetPackage(request) => to_payload(&services::get_package(
                stub,
                &request.carton_id,
                &request.package_id,
            )?),
            Operation::GetCartonPackages(lookup) => {
                to_payload(&services::list_packages(stub, &lookup.carton_id)?)
            }
            Operation::UserExists(user) => {
                to_payload(&services::user_exists(stub, &user.name, &user.role))
            }
        }
    }

    fn init_inner(&self, stub: &mut dyn ChaincodeStub, function: &str, args: &[String]) -> Result<()> {
        if function != "init" {
            return Err(ChaincodeError::MalformedInput(
                "Expected 'init' function.".to_string(),
            ));
        }
        let [raw] = args else {
            return Err(ChaincodeError::MalformedInput(format!(
                "Expected 1 argument, but got {}",
                args.len()
            )));
        };
        services::initialize(stub, raw)?;
        Ok(())
    }
}

impl Chaincode for CustodyChaincode {
    #[instrument(skip(self, stub, args), fields(tx_id = %stub.tx_id()))]
    fn init(&self, stub: &mut dyn ChaincodeStub, function: &str, args: &[String]) -> Response {
        match self.init_inner(stub, function, args) {
            Ok(()) => Response::ok(),
            Err(err) => failure(function, err),
        }
    }

    #[instrument(skip(self, stub, args), fields(tx_id = %stub.tx_id()))]
    fn invoke(&self, stub: &mut dyn ChaincodeStub, function: &str, args: &[String]) -> Response {
        let outcome = Operation::parse(function, args).and_then(|operation| {
            debug!(operation = %operation, "dispatching");
            self.execute(stub, operation)
        });
        match outcome {
            Ok(payload) => Response::success(payload),
            Err(err) => failure(function, err),
        }
    }
}

fn to_payload<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

fn failure(function: &str, err: ChaincodeError) -> Response {
    warn!(function, kind = err.kind(), error = %err, "invocation failed");
    Response::error(err.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
