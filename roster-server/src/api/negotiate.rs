//! Content negotiation
//!
//! [`Accepts`] reads the request's `Accept` header; [`Negotiated`] turns an
//! envelope into an HTTP response in the negotiated format, with the status
//! code derived from the envelope's error kind.

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::response::IntoResponse;
use http::header::CONTENT_TYPE;
use http::request::Parts;
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::error::ErrorKind;
use shared::response::Response;

/// Wire format selected for a response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wire {
    #[default]
    Json,
    Xml,
}

impl Wire {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Accept-header extractor
///
/// Media ranges are scanned in header order; the first recognized one wins.
/// Absent, malformed, or unrecognized headers fall back to JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accepts(pub Wire);

impl Accepts {
    fn from_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self(Wire::Json);
        };
        for range in value.split(',') {
            let media = range.split(';').next().unwrap_or("").trim();
            match media {
                "application/json" | "*/*" | "application/*" => return Self(Wire::Json),
                "application/xml" | "text/xml" => return Self(Wire::Xml),
                _ => continue,
            }
        }
        Self(Wire::Json)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Accepts {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::ACCEPT)
            .and_then(|v| v.to_str().ok());
        Ok(Self::from_header(header))
    }
}

/// Envelope plus the wire format it will be serialized in
///
/// The status code comes from the envelope's kind. Envelopes classified as
/// `Exception` have their messages replaced with the fixed generic text
/// before serialization; raw fault text never crosses the HTTP boundary.
#[derive(Debug)]
pub struct Negotiated<T> {
    wire: Wire,
    envelope: Response<T>,
}

impl<T> Negotiated<T> {
    pub fn new(accepts: Accepts, envelope: Response<T>) -> Self {
        Self {
            wire: accepts.0,
            envelope,
        }
    }

    /// JSON rendition, used where no Accept header is in play
    pub fn json(envelope: Response<T>) -> Self {
        Self {
            wire: Wire::Json,
            envelope,
        }
    }
}

fn scrub<T>(envelope: Response<T>) -> Response<T> {
    if envelope.kind == ErrorKind::Exception {
        Response {
            messages: vec![ErrorKind::Exception.default_message().to_string()],
            data: None,
            ..envelope
        }
    } else {
        envelope
    }
}

fn serialize<T: Serialize>(wire: Wire, envelope: &Response<T>) -> Result<String, String> {
    match wire {
        Wire::Json => serde_json::to_string(envelope).map_err(|e| e.to_string()),
        Wire::Xml => {
            quick_xml::se::to_string_with_root("response", envelope).map_err(|e| e.to_string())
        }
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> axum::response::Response {
        let status = self.envelope.http_status();
        let envelope = scrub(self.envelope);

        match serialize(self.wire, &envelope) {
            Ok(body) => http::Response::builder()
                .status(status)
                .header(
                    CONTENT_TYPE,
                    HeaderValue::from_static(self.wire.content_type()),
                )
                .body(Body::from(body))
                .unwrap_or_else(|_| {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response envelope");
                let fallback = Response::<()>::error_with_kind(ErrorKind::Exception, "");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    serde_json::to_string(&fallback).unwrap_or_default(),
                )
                    .into_response()
            }
        }
    }
}

/// JSON body extractor that rejects with an envelope
///
/// Replaces the framework's plain-text rejection so malformed or missing
/// bodies come back as BadRequest envelopes like every other failure.
pub struct ValidJson<T>(pub T);

impl<S, T> axum::extract::FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Negotiated<()>;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Negotiated::json(Response::error(rejection.body_text()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_header_defaults_to_json() {
        assert_eq!(Accepts::from_header(None).0, Wire::Json);
    }

    #[test]
    fn xml_media_types_select_xml() {
        assert_eq!(Accepts::from_header(Some("application/xml")).0, Wire::Xml);
        assert_eq!(Accepts::from_header(Some("text/xml")).0, Wire::Xml);
    }

    #[test]
    fn header_order_wins() {
        assert_eq!(
            Accepts::from_header(Some("application/json, application/xml")).0,
            Wire::Json
        );
        assert_eq!(
            Accepts::from_header(Some("application/xml;q=0.9, application/json")).0,
            Wire::Xml
        );
    }

    #[test]
    fn unrecognized_header_defaults_to_json() {
        assert_eq!(Accepts::from_header(Some("text/html")).0, Wire::Json);
        assert_eq!(Accepts::from_header(Some("nonsense")).0, Wire::Json);
    }

    #[test]
    fn scrub_replaces_exception_messages() {
        let resp = scrub(Response::<()>::failure("lock poisoned at store.rs:42"));
        assert_eq!(resp.messages, vec!["An unexpected error occurred."]);
        assert!(!resp.success);
    }

    #[test]
    fn scrub_leaves_other_kinds_alone() {
        let resp = scrub(Response::<()>::not_found("Person 3 not found"));
        assert_eq!(resp.messages, vec!["Person 3 not found"]);
    }

    #[test]
    fn xml_serialization_has_root_element() {
        let envelope = Response::ok_with_message(7, "done");
        let xml = serialize(Wire::Xml, &envelope).unwrap();
        assert!(xml.starts_with("<response"));
        assert!(xml.contains("<messages>done</messages>"));
    }
}
