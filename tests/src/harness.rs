//! # Test Harness
//!
//! A fresh ledger with a stepping clock plus the chaincode, and typed
//! helpers for the operations the flows exercise. Every call is one
//! committed-or-discarded transaction.

use cf_01_ledger_substrate::{InMemoryLedger, SteppingClock};
use cf_02_custody_chaincode::prelude::*;
use cf_shared_types::Response;

/// Start of the stepping clock, in Unix seconds.
pub const GENESIS_SECS: i64 = 1_700_000_000;

/// Chaincode hosted on a private in-memory ledger.
pub struct Harness {
    pub ledger: InMemoryLedger,
    pub chaincode: CustodyChaincode,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ChaincodeConfig::default())
    }

    pub fn with_config(config: ChaincodeConfig) -> Self {
        Self {
            ledger: InMemoryLedger::with_clock(SteppingClock::from_unix_secs(GENESIS_SECS)),
            chaincode: CustodyChaincode::new(config).expect("valid config"),
        }
    }

    pub fn init(&self, creator: &str, arg: &str) -> Response {
        self.ledger
            .execute(creator, |stub| self.chaincode.init(stub, "init", &[arg.to_string()]))
    }

    pub fn invoke(&self, creator: &str, function: &str, args: &[&str]) -> Response {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.ledger
            .execute(creator, |stub| self.chaincode.invoke(stub, function, &args))
    }

    pub fn create_carton(&self, producer: &str, package_num: u32) -> CreateCartonResponse {
        let arg = format!(r#"{{"name":"Batch1","description":"d","packageNum":{package_num}}}"#);
        let response = self.invoke(producer, "createCarton", &[&arg]);
        assert!(response.is_ok(), "createCarton failed: {}", response.message);
        response.payload_json().expect("createCarton payload")
    }

    pub fn sell_carton(&self, caller: &str, carton_id: &str, buyer: &str) -> Response {
        let arg = format!(r#"{{"cartonId":"{carton_id}","buyer":"{buyer}"}}"#);
        self.invoke(caller, "sellCarton", &[&arg])
    }

    pub fn sell_package(&self, caller: &str, carton_id: &str, package_id: &str) -> Response {
        let arg = format!(r#"{{"cartonId":"{carton_id}","packageId":"{package_id}"}}"#);
        self.invoke(caller, "sellPackage", &[&arg])
    }

    pub fn get_carton(&self, carton_id: &str) -> Carton {
        let arg = format!(r#"{{"cartonId":"{carton_id}"}}"#);
        let response = self.invoke("auditor", "getCarton", &[&arg]);
        assert!(response.is_ok(), "getCarton failed: {}", response.message);
        response.payload_json().expect("carton payload")
    }

    pub fn get_package(&self, carton_id: &str, package_id: &str) -> Package {
        let arg = format!(r#"{{"cartonId":"{carton_id}","packageId":"{package_id}"}}"#);
        let response = self.invoke("auditor", "getPackage", &[&arg]);
        assert!(response.is_ok(), "getPackage failed: {}", response.message);
        response.payload_json().expect("package payload")
    }

    pub fn packages(&self, carton_id: &str) -> Vec<Package> {
        let arg = format!(r#"{{"cartonId":"{carton_id}"}}"#);
        let response = self.invoke("auditor", "getCartonPackages", &[&arg]);
        assert!(response.is_ok(), "getCartonPackages failed: {}", response.message);
        response.payload_json().expect("packages payload")
    }

    pub fn package_history(&self, carton_id: &str, package_id: &str) -> Response {
        let arg = format!(r#"{{"cartonId":"{carton_id}","packageId":"{package_id}"}}"#);
        self.invoke("auditor", "getPackageHistory", &[&arg])
    }

    pub fn user_exists(&self, name: &str, role: &str) -> bool {
        let arg = format!(r#"{{"name":"{name}","role":"{role}"}}"#);
        let response = self.invoke("auditor", "userExists", &[&arg]);
        response.payload_json().expect("bool payload")
    }
}
