//! Content negotiation at the HTTP boundary.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roster_server::api::build_app;
use roster_server::core::{Config, ServerState};

fn test_app() -> Router {
    let config = Config {
        http_port: 0,
        environment: "test".to_string(),
    };
    build_app(ServerState::initialize(&config))
}

async fn get_with_accept(app: &Router, uri: &str, accept: Option<&str>) -> (StatusCode, String, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn default_format_is_json() {
    let app = test_app();
    let (status, content_type, body) = get_with_accept(&app, "/api/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    assert!(body.starts_with('{'));
}

#[tokio::test]
async fn xml_accept_header_yields_xml() {
    let app = test_app();
    let (status, content_type, body) =
        get_with_accept(&app, "/api/customers/1", Some("application/xml")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/xml");
    assert!(body.starts_with("<response"));
    assert!(body.contains("John Smith"));
}

#[tokio::test]
async fn text_xml_is_recognized() {
    let app = test_app();
    let (_, content_type, _) =
        get_with_accept(&app, "/api/customers", Some("text/xml")).await;
    assert_eq!(content_type, "application/xml");
}

#[tokio::test]
async fn unrecognized_accept_falls_back_to_json() {
    let app = test_app();
    let (_, content_type, _) =
        get_with_accept(&app, "/api/customers", Some("text/html, image/png")).await;
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn failures_negotiate_too() {
    let app = test_app();
    let (status, content_type, body) =
        get_with_accept(&app, "/api/customers/99", Some("application/xml")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "application/xml");
    assert!(body.contains("not_found"));
    assert!(body.contains("99"));
}
