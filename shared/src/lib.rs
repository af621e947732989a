//! Shared types for the Roster workspace
//!
//! Common types used across multiple crates: the response envelope,
//! error taxonomy, domain models, and the console presentation adapter.

pub mod console;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use console::ConsoleReporter;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use response::Response;
