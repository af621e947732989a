//! Request-path middleware
//!
//! Cross-cutting filters written as explicit functions that wrap the next
//! handler, composed onto the router in `api::build_app`.

mod logging;
mod panic;

pub use logging::logging_middleware;
pub use panic::handle_panic;
