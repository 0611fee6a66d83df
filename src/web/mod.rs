//! Web interface module
//!
//! Provides the HTTP surface of the store: route registration, JSON envelope
//! formatting, and extraction of the client identification from request
//! headers. All storage semantics live in the store module.

mod handlers;
mod server;

pub use handlers::AppState;
pub use server::{app_router, run_web_server, API_VERSION};
