//! In-memory storage module
//!
//! Provides the concurrency-safe map from client identification to stored
//! value. This module is independent of the HTTP layer (loose coupling) and
//! performs no I/O and no logging of its own.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::AgentStore;
