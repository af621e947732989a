//! People store

use parking_lot::RwLock;

use shared::error::{ApiError, ApiResult};
use shared::models::{Person, PersonCreate, PersonUpdate};

/// In-memory people store
///
/// Ids are assigned sequentially starting from 1, matching the record
/// numbering the sample data set uses.
pub struct PeopleStore {
    inner: RwLock<Inner>,
}

struct Inner {
    records: Vec<Person>,
    next_id: i64,
}

impl PeopleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All records, in insertion order
    pub fn list(&self) -> Vec<Person> {
        self.inner.read().records.clone()
    }

    /// Look up a person by id
    pub fn get(&self, id: i64) -> ApiResult<Person> {
        self.inner
            .read()
            .records
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Person {} not found", id)))
    }

    /// Add a person
    ///
    /// Rejects absent or blank names; the caller gets the stored record
    /// with its assigned id.
    pub fn add(&self, payload: PersonCreate) -> ApiResult<Person> {
        let full_name = payload
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::validation("Person name is not provided"))?
            .to_string();

        let mut inner = self.inner.write();
        let person = Person {
            id: inner.next_id,
            full_name,
        };
        inner.next_id += 1;
        inner.records.push(person.clone());
        Ok(person)
    }

    /// Update a person
    ///
    /// Intentionally left unimplemented; callers receive a NotImplemented
    /// outcome regardless of input.
    pub fn update(&self, _id: i64, _payload: PersonUpdate) -> ApiResult<Person> {
        Err(ApiError::NotImplemented)
    }

    /// Remove a person by id
    pub fn remove(&self, id: i64) -> ApiResult<Person> {
        let mut inner = self.inner.write();
        let pos = inner
            .records
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found(format!("Person {} not found", id)))?;
        Ok(inner.records.remove(pos))
    }
}

impl Default for PeopleStore {
    fn default() -> Self {
        Self::new()
    }
}
