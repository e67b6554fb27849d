//! # Invocation Response Envelope
//!
//! The single value every chaincode entry point returns. Success carries an
//! optional payload; failure carries a human-readable message and no payload.

use serde::{Deserialize, Serialize};

/// Status codes, matching the shim convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    /// 200
    Ok,
    /// 500
    Error,
}

impl ResponseStatus {
    /// Numeric status code.
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::Error => 500,
        }
    }
}

/// Result of one chaincode invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Outcome.
    pub status: ResponseStatus,
    /// Failure message; empty on success.
    pub message: String,
    /// Success payload; empty on failure.
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: String::new(),
            payload,
        }
    }

    /// Successful response without payload.
    pub fn ok() -> Self {
        Self::success(Vec::new())
    }

    /// Failed response with `message` and no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if the invocation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }

    /// Payload decoded as UTF-8, lossily.
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    /// Decode the payload as JSON.
    pub fn payload_json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_has_no_payload() {
        let response = Response::error("Carton doesn't belong to you!");
        assert!(!response.is_ok());
        assert_eq!(response.status.code(), 500);
        assert!(response.payload.is_empty());
    }

    #[test]
    fn test_success_payload_json() {
        let response = Response::success(br#"{"admin":"alice"}"#.to_vec());
        assert!(response.is_ok());
        let value: serde_json::Value = response.payload_json().unwrap();
        assert_eq!(value["admin"], "alice");
    }
}
