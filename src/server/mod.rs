//! HTTP server module
//!
//! Contains the server core, application state, startup builder and the
//! route handlers.

pub mod builder;
pub mod routes;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
