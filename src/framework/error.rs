//! # Rejections & Normalization
//!
//! Anything an operation can fail with is a [`Failure`]. A failure never leaves
//! an operation as-is: [`normalize`] collapses it into a [`Rejection`], the
//! `{ message, detail }` envelope plus the HTTP status the caller should see.
//!
//! ## Resolution Rules
//!
//! | Field     | Taken from the caught value when...  | Otherwise               |
//! |-----------|--------------------------------------|-------------------------|
//! | `status`  | it is a positive whole number        | `400`                   |
//! | `message` | it is a non-empty string             | [`DEFAULT_MESSAGE`]     |
//! | `detail`  | it is a non-empty string             | the resolved `message`  |
//!
//! The caught value does not have to be an object. Strings, numbers and `null`
//! simply have no fields, so every field falls back to its default.

use serde::Serialize;
use serde_json::{json, Value};

/// Status used when the caught value does not carry a usable one.
pub const DEFAULT_STATUS: u16 = 400;

/// User-facing message used when the caught value does not carry one.
pub const DEFAULT_MESSAGE: &str = "An error occurred.";

/// The normalized error envelope returned by every operation.
///
/// Serializes to `{ "message": ..., "detail": ... }`. The status travels
/// alongside the body rather than inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Rejection {
    pub message: String,
    pub detail: String,
    #[serde(skip)]
    pub status: u16,
}

impl Rejection {
    /// Creates a rejection whose detail repeats the message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            detail: message.clone(),
            message,
            status,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// The rejection as a thrown value, status included.
    ///
    /// Feeding this back through [`normalize`] yields the same rejection.
    pub fn to_value(&self) -> Value {
        json!({
            "status": self.status,
            "message": self.message,
            "detail": self.detail,
        })
    }
}

/// Everything an operation handler can catch.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// An arbitrary value raised as an error, e.g. a mock `reject` payload.
    #[error("rejected with {0}")]
    Thrown(Value),

    /// The mock registry itself could not answer.
    #[error("mock registry lookup failed: {0}")]
    Registry(String),

    /// Parameters or results could not be turned into JSON.
    #[error("failed to encode envelope: {0}")]
    Encode(#[from] serde_json::Error),

    /// A failure that was already normalized further down.
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Collapses a caught failure into the envelope surfaced to callers.
pub fn normalize(failure: &Failure) -> Rejection {
    match failure {
        Failure::Thrown(value) => resolve(
            value.get("status").and_then(positive_status),
            value.get("message").and_then(non_empty_str),
            value.get("detail").and_then(non_empty_str),
        ),
        Failure::Rejected(rejection) => resolve(
            Some(rejection.status).filter(|status| *status > 0),
            Some(rejection.message.as_str()).filter(|m| !m.is_empty()),
            Some(rejection.detail.as_str()).filter(|d| !d.is_empty()),
        ),
        organic => resolve(None, Some(organic.to_string().as_str()), None),
    }
}

fn resolve(status: Option<u16>, message: Option<&str>, detail: Option<&str>) -> Rejection {
    let message = message.unwrap_or(DEFAULT_MESSAGE);
    Rejection {
        status: status.unwrap_or(DEFAULT_STATUS),
        message: message.to_owned(),
        detail: detail.unwrap_or(message).to_owned(),
    }
}

fn positive_status(value: &Value) -> Option<u16> {
    // Accepts 404 and 404.0 alike; fractions and out-of-range codes fall back.
    let status = value.as_f64()?;
    if status > 0.0 && status.fract() == 0.0 && status <= f64::from(u16::MAX) {
        Some(status as u16)
    } else {
        None
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thrown(value: Value) -> Rejection {
        normalize(&Failure::Thrown(value))
    }

    #[test]
    fn empty_object_falls_back_to_defaults() {
        let rejection = thrown(json!({}));
        assert_eq!(rejection.status, 400);
        assert_eq!(rejection.message, "An error occurred.");
        assert_eq!(rejection.detail, "An error occurred.");
    }

    #[test]
    fn detail_defaults_to_message() {
        let rejection = thrown(json!({ "status": 404, "message": "Not found" }));
        assert_eq!(rejection, Rejection::new(404, "Not found"));
    }

    #[test]
    fn explicit_detail_is_kept() {
        let rejection = thrown(json!({
            "status": 409,
            "message": "Conflict",
            "detail": "Organisation already registered",
        }));
        assert_eq!(rejection.status, 409);
        assert_eq!(rejection.message, "Conflict");
        assert_eq!(rejection.detail, "Organisation already registered");
    }

    #[test]
    fn non_positive_status_falls_back() {
        assert_eq!(thrown(json!({ "status": -1, "message": "x" })).status, 400);
        assert_eq!(thrown(json!({ "status": 0 })).status, 400);
    }

    #[test]
    fn non_numeric_or_fractional_status_falls_back() {
        assert_eq!(thrown(json!({ "status": "404" })).status, 400);
        assert_eq!(thrown(json!({ "status": 404.5 })).status, 400);
        assert_eq!(thrown(json!({ "status": 70000 })).status, 400);
        assert_eq!(thrown(json!({ "status": 503.0 })).status, 503);
    }

    #[test]
    fn empty_message_and_detail_fall_back() {
        let rejection = thrown(json!({ "message": "", "detail": "" }));
        assert_eq!(rejection.message, DEFAULT_MESSAGE);
        assert_eq!(rejection.detail, DEFAULT_MESSAGE);
    }

    #[test]
    fn non_string_message_and_detail_fall_back() {
        assert_eq!(thrown(json!({ "status": 409, "message": 42, "detail": true })), Rejection::new(409, DEFAULT_MESSAGE));
    }

    #[test]
    fn non_object_values_never_fail() {
        for value in [json!("boom"), json!(null), json!(42), json!([1, 2]), json!(true)] {
            let rejection = thrown(value);
            assert_eq!(rejection, Rejection::new(400, DEFAULT_MESSAGE));
        }
    }

    #[test]
    fn organic_failures_use_their_display_text() {
        let rejection = normalize(&Failure::Registry("backend offline".into()));
        assert_eq!(rejection.status, 400);
        assert_eq!(rejection.message, "mock registry lookup failed: backend offline");
        assert_eq!(rejection.detail, rejection.message);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = thrown(json!({ "status": 422, "message": "Invalid", "detail": "uri is required" }));

        let via_value = thrown(first.to_value());
        let via_rejection = normalize(&Failure::Rejected(first.clone()));

        assert_eq!(via_value, first);
        assert_eq!(via_rejection, first);
    }

    #[test]
    fn serializes_without_status() {
        let body = serde_json::to_value(Rejection::new(404, "Not found")).unwrap();
        assert_eq!(body, json!({ "message": "Not found", "detail": "Not found" }));
    }
}
