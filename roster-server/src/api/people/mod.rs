//! People API Module

mod handler;

use axum::routing::get;
use axum::Router;

use crate::core::ServerState;

/// People router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/people", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
