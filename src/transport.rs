//! Transport boundary: the component that performs the actual network I/O.
//!
//! The executor only ever talks to [`HttpTransport`]; TLS, redirects and
//! connection pooling are the transport's business. Implementations must
//! be safe for concurrent submission since one transport is shared across
//! all calls.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::endpoint::CompiledRequest;

/// Failure reported by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No network connection could be established. Transports that cannot
    /// tell connectivity loss apart from other failures never emit this.
    #[error("connection unavailable: {0}")]
    Offline(String),

    /// Any other transport-level failure, carrying the transport's own
    /// diagnostic text.
    #[error("{0}")]
    Failed(String),
}

/// Raw response handed back by a transport. Status and headers are
/// surfaced as metadata; outcome classification happens in the executor.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Pluggable network I/O.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform the round-trip for one compiled request. Exactly one
    /// outcome is produced per submission.
    async fn execute(&self, request: CompiledRequest)
        -> Result<TransportResponse, TransportError>;
}

/// Default transport over a shared `reqwest::Client` connection pool.
///
/// Non-2xx statuses are not errors at this layer: the response is
/// returned as-is and the decoder decides the outcome.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client (shared pool, custom TLS or proxy setup).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: CompiledRequest,
    ) -> Result<TransportResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.name().as_bytes())
            .map_err(|err| TransportError::Failed(err.to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// reqwest reports connect failures distinctly, which is the strongest
/// connectivity signal available here; everything else keeps its
/// diagnostic text.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Offline(err.to_string())
    } else {
        TransportError::Failed(err.to_string())
    }
}
