//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key / base id configured
    #[error("Content source not configured")]
    Unconfigured,

    /// Invalid or missing API key
    #[error("Authentication required")]
    Unauthorized,

    /// Key lacks access to the base or table
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Unknown base, table or view
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too many requests
    #[error("Rate limited")]
    RateLimited,

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure injected by an in-memory source
    #[error("Injected failure: {0}")]
    Injected(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
