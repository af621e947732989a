//! People API Handlers
//!
//! Each handler concludes its operation by building one envelope and hands
//! it to [`Negotiated`] for status mapping and serialization.

use axum::extract::{Path, State};

use shared::models::{Person, PersonCreate, PersonUpdate};
use shared::response::Response;

use crate::api::negotiate::{Accepts, Negotiated, ValidJson};
use crate::core::ServerState;

/// List all people
pub async fn list(State(state): State<ServerState>, accepts: Accepts) -> Negotiated<Vec<Person>> {
    Negotiated::new(accepts, Response::ok(state.people.list()))
}

/// Get person by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    accepts: Accepts,
    Path(id): Path<i64>,
) -> Negotiated<Person> {
    Negotiated::new(accepts, state.people.get(id).into())
}

/// Add a new person
pub async fn create(
    State(state): State<ServerState>,
    accepts: Accepts,
    ValidJson(payload): ValidJson<PersonCreate>,
) -> Negotiated<Person> {
    let envelope = match state.people.add(payload) {
        Ok(person) => {
            let message = format!("{} has been added.", person.full_name);
            Response::ok_with_message(person, message)
        }
        Err(e) => e.into(),
    };
    Negotiated::new(accepts, envelope)
}

/// Update a person (not implemented)
pub async fn update(
    State(state): State<ServerState>,
    accepts: Accepts,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<PersonUpdate>,
) -> Negotiated<Person> {
    Negotiated::new(accepts, state.people.update(id, payload).into())
}

/// Remove a person
pub async fn delete(
    State(state): State<ServerState>,
    accepts: Accepts,
    Path(id): Path<i64>,
) -> Negotiated<Person> {
    let envelope = Response::from_result(
        state.people.remove(id),
        format!("Person {} has been removed.", id),
    );
    Negotiated::new(accepts, envelope)
}
