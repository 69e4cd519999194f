//! Error types for pagelink
//!
//! Every public operation returns `Result<T, Error>`. The fetch-related
//! variants (`Transport`, `HttpStatus`, `Decode`, `NoSuchPage`, `Superseded`)
//! are what callers of the coordinator match on; the rest come from loading
//! configuration.

use thiserror::Error;

/// The main error type for pagelink
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("No page available for '{token}'")]
    NoSuchPage { token: String },

    #[error("Request #{seq} was superseded by a newer request")]
    Superseded { seq: u64 },

    #[error("Invalid resource id: {id:?}")]
    InvalidId { id: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The fetch failure taxonomy is the crate error type
pub type FetchError = Error;

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a missing navigation direction error
    pub fn no_such_page(token: impl Into<String>) -> Self {
        Self::NoSuchPage {
            token: token.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether a caller could reasonably retry the same request.
    ///
    /// The client never retries on its own; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Whether this failure was decided locally, without touching the network
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::NoSuchPage { .. } | Error::Superseded { .. } | Error::InvalidId { .. }
        )
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for pagelink
pub type Result<T> = std::result::Result<T, Error>;
