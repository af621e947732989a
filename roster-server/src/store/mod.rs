//! In-memory data stores
//!
//! Each store owns its records behind a `parking_lot::RwLock`. Lock scopes
//! are short and never held across an await point.

mod customers;
mod people;

pub use customers::CustomerStore;
pub use people::PeopleStore;
