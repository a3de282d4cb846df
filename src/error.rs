//! Error types for the request pipeline.
//!
//! Every failure a caller can observe is classified into [`ApiError`]
//! before it crosses the crate boundary; raw transport or serde errors
//! never leak through.

use thiserror::Error;

/// Outcome of one executed request.
pub type ApiResult<T> = Result<T, ApiError>;

/// The closed set of failures surfaced to callers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The transport signalled that no network connection was available.
    #[error("no internet connection")]
    NoInternet,

    /// The endpoint could not be compiled into a request: malformed
    /// scheme or host, an invalid header, or a body that failed to encode.
    #[error("invalid request")]
    InvalidRequest,

    /// The response body was absent or could not be decoded into the
    /// expected type.
    #[error("invalid response data")]
    InvalidData,

    /// Any other transport-level failure, carrying the transport's
    /// diagnostic text verbatim.
    #[error("{0}")]
    Other(String),
}

/// Failure while encoding a request body.
#[derive(Error, Debug)]
pub enum BodyError {
    /// The wrapped payload could not be serialized.
    #[error("body serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BodyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
