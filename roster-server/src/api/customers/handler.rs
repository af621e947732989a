//! Customer API Handlers

use axum::extract::{Path, State};

use shared::models::Customer;
use shared::response::Response;

use crate::api::negotiate::{Accepts, Negotiated};
use crate::core::ServerState;

/// List all customers
pub async fn list(
    State(state): State<ServerState>,
    accepts: Accepts,
) -> Negotiated<Vec<Customer>> {
    Negotiated::new(accepts, Response::ok(state.customers.list()))
}

/// Get customer by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    accepts: Accepts,
    Path(id): Path<i64>,
) -> Negotiated<Customer> {
    Negotiated::new(accepts, state.customers.get(id).into())
}
