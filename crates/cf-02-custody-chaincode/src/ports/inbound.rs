//! # Inbound Port - Chaincode
//!
//! The two entry points a peer calls for every transaction proposal.

use cf_shared_types::{ChaincodeStub, Response};

/// Chaincode entry points.
///
/// Both take the invocation's transaction context, the function name and
/// the raw string arguments, and always answer with a [`Response`]. The
/// host commits the invocation's writes only for a successful response.
///
/// # Example
///
/// ```rust,ignore
/// use cf_02_custody_chaincode::prelude::*;
///
/// let chaincode = CustodyChaincode::default();
/// let response = ledger.execute("P1", |stub| {
///     chaincode.invoke(stub, "createUser", &["producer".to_string()])
/// });
/// assert!(response.is_ok());
/// ```
pub trait Chaincode: Send + Sync {
    /// One-time initialization.
    fn init(&self, stub: &mut dyn ChaincodeStub, function: &str, args: &[String]) -> Response;

    /// Every other operation.
    fn invoke(&self, stub: &mut dyn ChaincodeStub, function: &str, args: &[String]) -> Response;
}
