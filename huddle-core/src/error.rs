//! Error types for huddle.

use thiserror::Error;

/// Errors that can occur in huddle operations.
#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Duplicate meeting id: {0}")]
    DuplicateIdentifier(String),

    #[error("Malformed interval '{id}': start={start}, end={end} (bounds must be finite)")]
    MalformedInterval { id: String, start: f64, end: f64 },

    #[error("Conflict edge references unknown meeting id: {0}")]
    UnknownEdgeEndpoint(String),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Meeting id prefix '{0}' matches more than one meeting")]
    AmbiguousId(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for huddle operations.
pub type HuddleResult<T> = Result<T, HuddleError>;
