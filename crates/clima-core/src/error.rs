//! Error types for clima-core

use thiserror::Error;

/// Result type alias using clima-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clima-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The user declined the location permission prompt
    #[error("Location permission denied")]
    PermissionDenied,

    /// No position fix could be obtained
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the weather API
    #[error("Weather API returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the expected forecast schema
    #[error("Malformed forecast payload: {0}")]
    MalformedPayload(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
