//! Roster Server - response-envelope demonstration service
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── store/         # In-memory people and customer stores
//! ├── api/           # HTTP routes, handlers, content negotiation
//! ├── middleware/    # Request logging, panic capture
//! └── utils/         # Logging setup
//! ```
//!
//! Every handler concludes by building a [`shared::Response`] envelope;
//! the [`api::Negotiated`] adapter maps its error kind to an HTTP status
//! and serializes it as JSON or XML per the request's `Accept` header.

pub mod api;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::init_logger;

/// Load .env and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();
    utils::logger::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        std::env::var("LOG_DIR").ok().as_deref(),
    );
}
