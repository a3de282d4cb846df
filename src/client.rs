//! Request executor: compile, submit, classify, decode.

use std::error::Error;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpTransport, ReqwestTransport, TransportError};

/// Boxed error returned by a decoder closure.
pub type DecodeError = Box<dyn Error + Send + Sync>;

/// Executes endpoints against a transport and classifies every outcome
/// into [`ApiResult`].
///
/// The transport handle is shared for the client's lifetime; endpoint and
/// body values are borrowed per call and never retained. A submitted
/// request resolves to exactly one outcome — no retries, no cancellation,
/// no caching. Independently submitted requests may complete in any order.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// Client over the default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    /// Client over an injected transport (tests, alternative stacks).
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Execute `endpoint` at `path` and decode the response body with
    /// `decode`.
    ///
    /// Outcomes:
    /// - compile failure → [`ApiError::InvalidRequest`], transport never
    ///   invoked
    /// - transport connectivity failure → [`ApiError::NoInternet`]
    /// - any other transport failure → [`ApiError::Other`] with the
    ///   transport's diagnostic text verbatim
    /// - empty response body → [`ApiError::InvalidData`]
    /// - decode failure → [`ApiError::InvalidData`]
    pub async fn execute<T, D>(&self, endpoint: &Endpoint, path: &str, decode: D) -> ApiResult<T>
    where
        D: FnOnce(&[u8]) -> Result<T, DecodeError>,
    {
        let request = endpoint.compile(path)?;
        tracing::debug!("dispatching {} {}", request.method.name(), request.url);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(TransportError::Offline(msg)) => {
                tracing::warn!("transport offline: {}", msg);
                return Err(ApiError::NoInternet);
            }
            Err(TransportError::Failed(msg)) => {
                tracing::warn!("transport failure: {}", msg);
                return Err(ApiError::Other(msg));
            }
        };

        tracing::debug!("response status {}, {} bytes", response.status, response.body.len());
        if response.body.is_empty() {
            return Err(ApiError::InvalidData);
        }

        match decode(&response.body) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!("response decoding failed: {}", err);
                Err(ApiError::InvalidData)
            }
        }
    }

    /// Execute and decode the response body as JSON into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint, path: &str) -> ApiResult<T> {
        self.execute(endpoint, path, |bytes| {
            serde_json::from_slice(bytes).map_err(Into::into)
        })
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
