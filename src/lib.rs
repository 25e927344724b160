//! Parley - a client-side chat synchronization engine
//!
//! This library keeps a local view of chats and messages consistent with a
//! remote chat service that offers no push primitive, only HTTP long-polling.
//! It merges observed data into a local cache without duplicating or
//! reordering entries, drives a perpetual poll loop that survives timeouts
//! and transport failures, and decides on each update whether the displayed
//! conversation needs to be redrawn. Rendering itself is left to an external
//! collaborator wired in through a callback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod gateway;
pub mod messaging;
pub mod poller;
pub mod projector;
pub mod protocol;
pub mod session;
pub mod settings;

#[cfg(test)]
mod tests;

/// Result type alias for Parley operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Parley operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport layer error (network failure or non-success status)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A referenced chat is not present in the cache
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration or input value
    #[error("Validation error: {0}")]
    Validation(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialize the Parley library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
