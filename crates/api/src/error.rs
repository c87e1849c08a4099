//! Typed error type for the api crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured CORS origin is not a valid header value.
    #[error("invalid allowed origin: {0}")]
    InvalidOrigin(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
