//! AgentStore - an in-memory key-value store keyed by the client's User-Agent
//!
//! The store maps each client identification (the raw User-Agent header) to
//! one opaque byte value. The design keeps the two halves loosely coupled:
//! - The store module owns the map and its single reader/writer lock
//! - The web module is thin HTTP plumbing around the store's four operations
//! - No ambient global: the binary constructs the store and passes it down

pub mod store;
pub mod web;

/// Re-export commonly used types
pub use store::{AgentStore, StoreError};
