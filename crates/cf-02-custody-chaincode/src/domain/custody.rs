//! # Custody State Machine
//!
//! A carton has exactly one custody state, `Owned(identity)`. The only
//! transition is a sale by the current owner:
//!
//! ```text
//! Owned(producer) ──sellCarton by producer──→ Owned(buyer) ──→ ...
//! ```
//!
//! Package sales are authorized against the same state: only the carton's
//! current owner may sell any of its packages. Neither transition touches
//! the other's records.

use super::entities::Carton;
use crate::errors::ChaincodeError;

/// Custody state of a carton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Custody {
    Owned(String),
}

impl Custody {
    /// Current custody state of `carton`.
    pub fn of(carton: &Carton) -> Self {
        Custody::Owned(carton.owner.clone())
    }

    /// Current custodian.
    pub fn owner(&self) -> &str {
        match self {
            Custody::Owned(owner) => owner,
        }
    }

    /// Succeeds iff `caller` is the current custodian.
    pub fn authorize(&self, caller: &str) -> Result<(), ChaincodeError> {
        if self.owner() == caller {
            Ok(())
        } else {
            Err(ChaincodeError::NotAuthorized {
                caller: caller.to_string(),
                owner: self.owner().to_string(),
            })
        }
    }

    /// State after a sale to `buyer`, authorized for `caller`.
    pub fn transfer(&self, caller: &str, buyer: &str) -> Result<Custody, ChaincodeError> {
        self.authorize(caller)?;
        Ok(Custody::Owned(buyer.to_string()))
    }
}
