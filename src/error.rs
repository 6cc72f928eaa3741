//! Error types for grafwalk.

use thiserror::Error;

/// Error type for graph construction and walk extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// A walk root that is not present in the graph.
    #[error("Unknown instance: {0}")]
    UnknownInstance(String),

    /// Walker or sampler configuration rejected at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Triple parsing error.
    #[error("Failed to parse triple: {0}")]
    ParseTriple(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for graph construction and walk extraction.
pub type Result<T> = std::result::Result<T, Error>;
