//! Errors raised by the Supabase REST client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed connection settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure: DNS, TLS, connection reset and the like.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
