//! Response envelope types
//!
//! Standardized operation-outcome envelope used across the workspace.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ErrorKind};

/// Default message rendered for successful operations that carry none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully.";

/// Unified response envelope
///
/// Every operation concludes by constructing exactly one envelope, which is
/// then carried unchanged to whichever front-end consumes it:
///
/// ```json
/// {
///     "success": true,
///     "kind": "none",
///     "messages": ["Naeem Afzal has been added."],
///     "data": { ... }
/// }
/// ```
///
/// Invariants:
/// - `success == true` implies `kind == ErrorKind::None`
/// - error constructors always produce at least one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Failure classification (`None` on success)
    #[serde(default)]
    pub kind: ErrorKind,
    /// Human-readable messages, in the order they were produced
    #[serde(default)]
    pub messages: Vec<String>,
    /// Payload (only meaningful on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Response<T> {
    /// Create a successful envelope with a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            kind: ErrorKind::None,
            messages: Vec::new(),
            data: Some(data),
        }
    }

    /// Create a successful envelope with a payload and message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            kind: ErrorKind::None,
            messages: vec![message.into()],
            data: Some(data),
        }
    }

    /// Create a successful envelope without a payload
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            kind: ErrorKind::None,
            messages: Vec::new(),
            data: None,
        }
    }

    /// Create a failed envelope with an explicit kind
    pub fn error_with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        Self {
            success: false,
            kind: if kind == ErrorKind::None {
                ErrorKind::Unknown
            } else {
                kind
            },
            messages: vec![message],
            data: None,
        }
    }

    /// Create a failed envelope classified as a validation error
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with_kind(ErrorKind::BadRequest, message)
    }

    /// Create a failed envelope for a missing resource
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error_with_kind(ErrorKind::NotFound, message)
    }

    /// Create a failed envelope for an operation that is not implemented
    pub fn not_implemented() -> Self {
        Self::error_with_kind(ErrorKind::NotImplemented, "")
    }

    /// Create a failed envelope from an unexpected fault
    ///
    /// The fault's display text becomes the message. Whether that text may
    /// reach the consumer is the adapter's concern (the HTTP boundary
    /// substitutes a generic message, local adapters show it as-is).
    pub fn failure(fault: impl std::fmt::Display) -> Self {
        Self::error_with_kind(ErrorKind::Exception, fault.to_string())
    }

    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// HTTP status code for this envelope
    pub fn http_status(&self) -> http::StatusCode {
        self.kind.http_status()
    }

    /// Map the payload, keeping flag, kind and messages intact
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            success: self.success,
            kind: self.kind,
            messages: self.messages,
            data: self.data.map(f),
        }
    }

    /// Convert a `Result` into an envelope, attaching a success message
    pub fn from_result(result: Result<T, ApiError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::ok_with_message(data, message),
            Err(e) => e.into(),
        }
    }
}

impl<T> From<ApiError> for Response<T> {
    fn from(err: ApiError) -> Self {
        Self::error_with_kind(err.kind(), err.to_string())
    }
}

impl<T> From<Result<T, ApiError>> for Response<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_sets_success_and_clears_kind() {
        let resp = Response::ok(42);
        assert!(resp.success);
        assert_eq!(resp.kind, ErrorKind::None);
        assert_eq!(resp.data, Some(42));
        assert!(resp.messages.is_empty());
    }

    #[test]
    fn ok_with_message_carries_single_message() {
        let resp = Response::ok_with_message(1, "Naeem Afzal has been added.");
        assert!(resp.success);
        assert_eq!(resp.messages, vec!["Naeem Afzal has been added."]);
    }

    #[test]
    fn error_defaults_to_bad_request() {
        let resp = Response::<()>::error("Person name is not provided");
        assert!(!resp.success);
        assert_eq!(resp.kind, ErrorKind::BadRequest);
        assert_eq!(resp.messages, vec!["Person name is not provided"]);
    }

    #[test]
    fn error_constructors_never_leave_messages_empty() {
        let envelopes = [
            Response::<()>::error(""),
            Response::<()>::not_found(""),
            Response::<()>::not_implemented(),
            Response::<()>::failure(std::io::Error::other("boom")),
            Response::<()>::error_with_kind(ErrorKind::Unknown, ""),
        ];
        for resp in envelopes {
            assert!(!resp.success);
            assert!(!resp.messages.is_empty());
            assert!(!resp.messages[0].is_empty());
        }
    }

    #[test]
    fn error_with_kind_none_is_reclassified() {
        let resp = Response::<()>::error_with_kind(ErrorKind::None, "odd");
        assert!(!resp.success);
        assert_eq!(resp.kind, ErrorKind::Unknown);
    }

    #[test]
    fn failure_uses_fault_text() {
        let resp = Response::<()>::failure("disk on fire");
        assert_eq!(resp.kind, ErrorKind::Exception);
        assert_eq!(resp.messages, vec!["disk on fire"]);
    }

    #[test]
    fn not_implemented_uses_default_text() {
        let resp = Response::<()>::not_implemented();
        assert_eq!(
            resp.messages,
            vec![ErrorKind::NotImplemented.default_message()]
        );
        assert_eq!(resp.kind, ErrorKind::NotImplemented);
    }

    #[test]
    fn map_preserves_flag_and_messages() {
        let resp = Response::ok_with_message(2, "doubled").map(|n| n * 2);
        assert!(resp.success);
        assert_eq!(resp.data, Some(4));
        assert_eq!(resp.messages, vec!["doubled"]);
    }

    #[test]
    fn serializes_without_data_field_when_absent() {
        let resp = Response::<()>::error("nope");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["kind"], "bad_request");
    }

    #[test]
    fn round_trips_through_json() {
        let resp = Response::ok_with_message("payload".to_string(), "done");
        let json = serde_json::to_string(&resp).unwrap();
        let back: Response<String> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.data.as_deref(), Some("payload"));
    }
}
