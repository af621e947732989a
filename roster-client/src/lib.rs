//! Roster Client - HTTP client for the Roster server
//!
//! Network-based typed calls over the response-envelope contract. Every
//! call resolves to an envelope: server-produced envelopes pass through
//! unchanged (whatever the status code), and transport faults are folded
//! into Exception envelopes so callers never handle a raw error.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::Response;
pub use shared::models::{Customer, Person, PersonCreate, PersonUpdate};
