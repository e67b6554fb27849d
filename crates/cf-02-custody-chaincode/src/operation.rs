//! # Operation Dispatch
//!
//! The closed set of invoke operations. Parsing decodes the argument once;
//! the service then matches on the variant.

use crate::domain::{CartonLookup, CartonRef, NewCarton, PackageRef, UserRef};
use crate::errors::{ChaincodeError, Result};
use serde::de::DeserializeOwned;
use std::fmt;

/// An invoke operation with its decoded argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Stored settings.
    Info,
    /// Register the caller under a role.
    CreateUser { role: String },
    /// Create a carton and its packages.
    CreateCarton(NewCarton),
    /// Transfer carton custody.
    SellCarton(CartonRef),
    /// Sell one package.
    SellPackage(PackageRef),
    /// Carton, package and carton custody history.
    GetPackageHistory(PackageRef),
    GetCarton(CartonLookup),
    GetPackage(PackageRef),
    GetCartonPackages(CartonLookup),
    UserExists(UserRef),
}

impl Operation {
    /// Every operation name, in dispatch order.
    pub const NAMES: [&'static str; 10] = [
        "info",
        "createUser",
        "createCarton",
        "sellCarton",
        "sellPackage",
        "getPackageHistory",
        "getCarton",
        "getPackage",
        "getCartonPackages",
        "userExists",
    ];

    /// Decode `function` and `args` into an operation.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` for a name outside [`Operation::NAMES`]
    /// - `MalformedInput` for a wrong argument count or undecodable JSON
    pub fn parse(function: &str, args: &[String]) -> Result<Self> {
        if function == "info" {
            return Ok(Operation::Info);
        }
        if !Self::NAMES.contains(&function) {
            return Err(ChaincodeError::UnknownOperation(function.to_string()));
        }

        let [arg] = args else {
            return Err(ChaincodeError::MalformedInput("expected 1 argument".to_string()));
        };

        Ok(match function {
            "createUser" => Operation::CreateUser { role: arg.clone() },
            "createCarton" => Operation::CreateCarton(decode("carton", arg)?),
            "sellCarton" => Operation::SellCarton(decode(function, arg)?),
            "sellPackage" => Operation::SellPackage(decode(function, arg)?),
            "getPackageHistory" => Operation::GetPackageHistory(decode(function, arg)?),
            "getCarton" => Operation::GetCarton(decode(function, arg)?),
            "getPackage" => Operation::GetPackage(decode(function, arg)?),
            "getCartonPackages" => Operation::GetCartonPackages(decode(function, arg)?),
            "userExists" => Operation::UserExists(decode(function, arg)?),
            other => return Err(ChaincodeError::UnknownOperation(other.to_string())),
        })
    }

    /// Operation name as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Info => "info",
            Operation::CreateUser { .. } => "createUser",
            Operation::CreateCarton(_) => "createCarton",
            Operation::SellCarton(_) => "sellCarton",
            Operation::SellPackage(_) => "sellPackage",
            Operation::GetPackageHistory(_) => "getPackageHistory",
            Operation::GetCarton(_) => "getCarton",
            Operation::GetPackage(_) => "getPackage",
            Operation::GetCartonPackages(_) => "getCartonPackages",
            Operation::UserExists(_) => "userExists",
        }
    }

    /// Whether the operation stages writes.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Operation::CreateUser { .. }
                | Operation::CreateCarton(_)
                | Operation::SellCarton(_)
                | Operation::SellPackage(_)
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode<T: DeserializeOwned>(subject: &str, arg: &str) -> Result<T> {
    serde_json::from_str(arg).map_err(|err| {
        ChaincodeError::MalformedInput(format!("Error parsing {subject} request json: {err}"))
    })
}

// =============================================================================
// TESTS
// =============================================================================
