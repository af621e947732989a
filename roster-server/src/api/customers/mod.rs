//! Customer API Module

mod handler;

use axum::routing::get;
use axum::Router;

use crate::core::ServerState;

/// Customer router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
