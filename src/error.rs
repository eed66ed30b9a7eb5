// Error types for roster.
// Covers student API failures, session cache failures, and configuration errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed: API key rejected")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Cached value for {key} is corrupt: {source}")]
    CacheReadCorrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cache write for {key} rejected: {reason}")]
    CacheWriteRejected { key: String, reason: String },

    #[error("Missing configuration value {0}")]
    MissingConfig(&'static str),

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
