//! Uniform success/error response shape returned by every tool
//!
//! On the wire an envelope is a single JSON object discriminated by
//! `status`:
//!
//! ```json
//! {"status": "success", "symbol": "IBM", "overview": {}}
//! {"status": "error", "error": "Missing API key"}
//! ```
//!
//! Payload fields are flattened next to `status`, so the payload type must
//! serialize as a JSON object. Callers must only look at payload fields when
//! `status == "success"`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Tool response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    /// Call succeeded; payload fields sit beside `status`
    Success(T),
    /// Call failed; nothing but a human-readable message
    Error {
        /// What went wrong
        error: String,
    },
}

impl<T> Envelope<T> {
    /// Wrap a payload
    pub fn success(payload: T) -> Self {
        Self::Success(payload)
    }

    /// Build an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Collapse any result into an envelope, using the error's `Display`
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// Whether this is a success envelope
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Payload, if successful
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error { .. } => None,
        }
    }

    /// Error message, if failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { error } => Some(error),
        }
    }

    /// Convert back into a `Result` with the message as error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error { error } => Err(error),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize into a JSON value
    ///
    /// Fails only if the payload does not serialize as a JSON object.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        symbol: String,
        value: Option<u32>,
    }

    #[test]
    fn test_success_shape() {
        let env = Envelope::success(Payload {
            symbol: "IBM".to_string(),
            value: None,
        });

        assert_eq!(
            env.to_value().unwrap(),
            json!({"status": "success", "symbol": "IBM", "value": null})
        );
        assert!(env.is_success());
        assert!(env.error_message().is_none());
    }

    #[test]
    fn test_error_shape() {
        let env: Envelope<Payload> = Envelope::error("Missing API key");

        assert_eq!(
            env.to_value().unwrap(),
            json!({"status": "error", "error": "Missing API key"})
        );
        assert!(!env.is_success());
        assert!(env.payload().is_none());
        assert_eq!(env.error_message(), Some("Missing API key"));
    }

    #[test]
    fn test_from_result() {
        let ok: Envelope<Payload> = Envelope::from_result(Ok::<_, String>(Payload {
            symbol: "A".to_string(),
            value: Some(1),
        }));
        assert_eq!(ok.payload().map(|p| p.value), Some(Some(1)));

        let err: Envelope<Payload> = Envelope::from_result(Err("boom"));
        assert_eq!(err.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn test_deserialize() {
        let env: Envelope<Payload> =
            serde_json::from_value(json!({"status": "success", "symbol": "X", "value": 3}))
                .unwrap();
        assert_eq!(env.payload().map(|p| p.symbol.as_str()), Some("X"));

        let env: Envelope<Payload> =
            serde_json::from_value(json!({"status": "error", "error": "nope"})).unwrap();
        assert_eq!(env.error_message(), Some("nope"));
    }

    #[test]
    fn test_non_object_payload_fails() {
        let env = Envelope::success(42_u32);
        assert!(env.to_value().is_err());
    }
}
