//! Health check route
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /health | GET | Simple health check | none |

use axum::routing::get;
use axum::{Json, Router, extract::State};
use serde::Serialize;

use crate::core::ServerState;

/// Health router - public route
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    /// Package version
    version: &'static str,
    /// Runtime environment
    environment: String,
    /// Number of records currently held
    people: usize,
    customers: usize,
}

/// Basic health check
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        people: state.people.list().len(),
        customers: state.customers.list().len(),
    })
}
