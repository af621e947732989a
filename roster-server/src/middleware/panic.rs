//! Panic capture
//!
//! Converts a panicked handler into an Exception envelope. The panic text
//! goes to the log only; the wire carries the fixed generic message.

use axum::body::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};

use shared::error::ErrorKind;
use shared::response::Response;

/// Panic responder for `CatchPanicLayer`
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> http::Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let envelope = Response::<()>::error_with_kind(ErrorKind::Exception, "");
    let body = serde_json::to_string(&envelope).unwrap_or_default();

    http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(Body::from(body))
        .unwrap_or_else(|_| {
            let mut resp = http::Response::new(Body::from("Internal error"));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_response_is_generic_500() {
        let response = handle_panic(Box::new("secret detail".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
