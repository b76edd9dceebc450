//! Error types for the Pelican client.
//!
//! # Design
//! Two failure families must stay distinguishable: the panel *rejected* the
//! request (`Error::Api`, built from the status code and the panel's
//! `{ "errors": [...] }` body), or the request never produced a response
//! (`Error::Transport`, the transport's own error passed through
//! untouched). Building an `ApiError` never fails; an unreadable body simply
//! yields no entries and a generic `HTTP {status}` message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Boxed error produced by a `Transport` when no HTTP response was received.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The panel answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No HTTP response was received (DNS, refused connection, TLS, timeout).
    #[error(transparent)]
    Transport(TransportError),

    /// A request payload or query could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A multipart upload body could not be built.
    #[error("failed to encode multipart form: {0}")]
    Form(#[source] ureq::Error),

    /// A 2xx response body did not match the shape the operation expects.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns the API rejection if this error is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status of an API rejection or a decode failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A non-2xx response from the panel.
///
/// `Display` renders the `detail` of the first error entry, or `HTTP {status}`
/// when the body carried no usable entries.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    status: u16,
    errors: Vec<ErrorEntry>,
    message: String,
}

impl ApiError {
    /// Classify a raw response body. Never fails.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(status, &value),
            Err(_) => Self::from_entries(status, Vec::new()),
        }
    }

    /// Classify an already-parsed body. Never fails.
    pub fn from_value(status: u16, body: &Value) -> Self {
        let errors = body
            .get("errors")
            .filter(|errors| errors.is_array())
            .and_then(|errors| Vec::<ErrorEntry>::deserialize(errors).ok())
            .unwrap_or_default();
        Self::from_entries(status, errors)
    }

    pub fn from_entries(status: u16, errors: Vec<ErrorEntry>) -> Self {
        let message = match errors.first() {
            Some(entry) => entry.detail.clone(),
            None => format!("HTTP {status}"),
        };
        Self {
            status,
            errors,
            message,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First error entry whose `source.field` matches `field`.
    pub fn field_error(&self, field: &str) -> Option<&ErrorEntry> {
        self.errors
            .iter()
            .find(|entry| entry.source.as_ref().is_some_and(|source| source.field == field))
    }
}

/// One entry of the panel's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: String,
    /// Sent as a string by the panel; a bare number is accepted too.
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Points at the request field that caused a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    pub field: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!("expected string or number, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn null_body_falls_back_to_status_message() {
        let err = ApiError::from_value(404, &Value::Null);
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "HTTP 404");
        assert!(err.errors().is_empty());
    }

    #[test]
    fn first_detail_becomes_message() {
        let body = json!({
            "errors": [
                {"code": "ValidationException", "status": "422", "detail": "Email is invalid"},
                {"code": "ValidationException", "status": "422", "detail": "Username is taken"}
            ]
        });
        let err = ApiError::from_value(422, &body);
        assert_eq!(err.message(), "Email is invalid");
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.errors()[1].detail, "Username is taken");
    }

    #[test]
    fn missing_errors_field_yields_empty_list() {
        let err = ApiError::from_value(500, &json!({"message": "Internal Server Error"}));
        assert!(err.errors().is_empty());
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn non_array_errors_field_yields_empty_list() {
        let err = ApiError::from_value(400, &json!({"errors": "nope"}));
        assert!(err.errors().is_empty());
        assert_eq!(err.message(), "HTTP 400");
    }

    #[test]
    fn malformed_entries_degrade_to_empty_list() {
        let err = ApiError::from_value(422, &json!({"errors": [{"code": 1}]}));
        assert!(err.errors().is_empty());
        assert_eq!(err.message(), "HTTP 422");
    }

    #[test]
    fn numeric_entry_status_keeps_the_detail() {
        let body = json!({"errors": [{"code": "NotFoundHttpException", "status": 404, "detail": "Server not found"}]});
        let err = ApiError::from_value(404, &body);
        assert_eq!(err.message(), "Server not found");
        assert_eq!(err.errors()[0].status, "404");
    }

    #[test]
    fn one_malformed_entry_empties_the_list() {
        let body = json!({"errors": [
            {"code": "ValidationException", "status": "422", "detail": "Email is invalid"},
            {"code": "ValidationException", "status": true, "detail": "Broken"}
        ]});
        let err = ApiError::from_value(422, &body);
        assert!(err.errors().is_empty());
        assert_eq!(err.message(), "HTTP 422");
    }

    #[test]
    fn non_json_body_degrades() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert!(err.errors().is_empty());
        assert_eq!(err.message(), "HTTP 502");
    }

    #[test]
    fn source_field_and_meta_are_preserved() {
        let body = json!({
            "errors": [{
                "code": "ValidationException",
                "status": "422",
                "detail": "Required",
                "source": {"field": "email"},
                "meta": {"rule": "required"}
            }]
        });
        let err = ApiError::from_value(422, &body);
        let entry = err.field_error("email").unwrap();
        assert_eq!(entry.detail, "Required");
        assert_eq!(entry.meta.as_ref().unwrap()["rule"], "required");
        assert!(err.field_error("username").is_none());
    }

    #[test]
    fn api_error_is_a_distinct_error_kind() {
        let err: Error = ApiError::from_value(403, &Value::Null).into();
        assert!(err.is_api());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(403));
        let as_std: &dyn std::error::Error = &err;
        assert_eq!(as_std.to_string(), "HTTP 403");
    }

    #[test]
    fn transport_error_display_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = Error::Transport(Box::new(io));
        assert!(err.as_api().is_none());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }

    fn entry_strategy() -> impl Strategy<Value = ErrorEntry> {
        ("[A-Za-z]{1,12}", 400u16..600, ".{0,40}", proptest::option::of("[a-z_]{1,10}")).prop_map(
            |(code, status, detail, field)| ErrorEntry {
                code,
                status: status.to_string(),
                detail,
                source: field.map(|field| ErrorSource { field }),
                meta: None,
            },
        )
    }

    fn body_without_errors() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            ".{0,20}".prop_map(Value::String),
            ("[a-df-z]{1,8}", ".{0,10}").prop_map(|(key, value)| json!({ key: value })),
            ".{0,10}".prop_map(|value| json!({ "errors": value })),
        ]
    }

    proptest! {
        /// Property: bodies without an `errors` array always yield the generic message.
        #[test]
        fn prop_missing_errors_array(status in 100u16..600, body in body_without_errors()) {
            let err = ApiError::from_value(status, &body);
            prop_assert!(err.errors().is_empty());
            prop_assert_eq!(err.message(), format!("HTTP {status}"));
            prop_assert_eq!(err.status(), status);
        }

        /// Property: a well-formed `errors` array is kept verbatim and the first detail wins.
        #[test]
        fn prop_errors_kept_verbatim(
            status in 400u16..600,
            entries in proptest::collection::vec(entry_strategy(), 1..5),
        ) {
            let body = json!({ "errors": entries });
            let err = ApiError::from_value(status, &body);
            prop_assert_eq!(err.errors(), entries.as_slice());
            prop_assert_eq!(err.message(), entries[0].detail.as_str());
        }

        /// Property: arbitrary bytes never make classification panic.
        #[test]
        fn prop_arbitrary_bytes_never_panic(status in 100u16..600, body in proptest::collection::vec(any::<u8>(), 0..64)) {
            let err = ApiError::from_response(status, &body);
            prop_assert_eq!(err.status(), status);
        }
    }
}
