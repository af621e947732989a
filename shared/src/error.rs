//! Error taxonomy
//!
//! Failure classification shared by every front-end, plus the typed error
//! used inside data-access and handler code before an operation concludes.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure classification carried by every envelope
///
/// `None` marks a successful outcome; everything else is a failure
/// category. The set is closed: adapters rely on the mapping below being
/// total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No error (successful outcome)
    #[default]
    None,
    /// Validation failure
    BadRequest,
    /// Requested resource does not exist
    NotFound,
    /// Operation is not implemented
    NotImplemented,
    /// Unexpected runtime fault
    Exception,
    /// Fallback for unclassified failures
    Unknown,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// Total over the enum; every variant maps to exactly one code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::None => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::Exception => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default message for this kind
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::None => "Success",
            Self::BadRequest => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::NotImplemented => "Not implemented",
            Self::Exception => "An unexpected error occurred.",
            Self::Unknown => "Unknown error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::NotImplemented => "not_implemented",
            Self::Exception => "exception",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Typed error for data-access and handler internals
///
/// Operations propagate this with `?` until they conclude, then convert it
/// into an envelope exactly once.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation failure
    #[error("{0}")]
    Validation(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Operation not implemented
    #[error("Not implemented")]
    NotImplemented,

    /// Unexpected runtime fault
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Failure classification for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NotImplemented => ErrorKind::NotImplemented,
            Self::Unexpected(_) => ErrorKind::Exception,
        }
    }
}

/// Result type for operations that have not yet concluded
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ErrorKind; 6] = [
        ErrorKind::None,
        ErrorKind::BadRequest,
        ErrorKind::NotFound,
        ErrorKind::NotImplemented,
        ErrorKind::Exception,
        ErrorKind::Unknown,
    ];

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorKind::None.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(ErrorKind::BadRequest.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorKind::NotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_implemented_status() {
        assert_eq!(
            ErrorKind::NotImplemented.http_status(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn test_fault_status() {
        assert_eq!(
            ErrorKind::Exception.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorKind::Unknown.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_mapping_is_stable() {
        for kind in ALL_KINDS {
            assert_eq!(kind.http_status(), kind.http_status());
        }
    }

    #[test]
    fn test_default_messages_nonempty() {
        for kind in ALL_KINDS {
            assert!(!kind.default_message().is_empty());
        }
    }

    #[test]
    fn test_api_error_kinds() {
        assert_eq!(
            ApiError::validation("bad").kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            ApiError::not_found("missing").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(ApiError::NotImplemented.kind(), ErrorKind::NotImplemented);
        assert_eq!(
            ApiError::unexpected("boom").kind(),
            ErrorKind::Exception
        );
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::not_found("Person 7 not found").to_string(),
            "Person 7 not found"
        );
        assert_eq!(ApiError::NotImplemented.to_string(), "Not implemented");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::NotImplemented).unwrap();
        assert_eq!(json, "\"not_implemented\"");
        let back: ErrorKind = serde_json::from_str("\"bad_request\"").unwrap();
        assert_eq!(back, ErrorKind::BadRequest);
    }
}
