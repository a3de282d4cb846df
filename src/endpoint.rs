//! Declarative endpoint descriptors and request compilation.

use std::collections::HashMap;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::body::HttpBody;
use crate::error::ApiError;
use crate::method::HttpMethod;

/// Immutable description of one logical API call.
///
/// Constructed per call via [`Endpoint::builder`], compiled once with the
/// request path, then discarded. Holds no connection state and performs no
/// I/O.
pub struct Endpoint {
    scheme: String,
    host: String,
    method: HttpMethod,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Box<dyn HttpBody>>,
}

/// Transport-ready artifact produced by [`Endpoint::compile`].
#[derive(Debug, Clone)]
pub struct CompiledRequest {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl Endpoint {
    /// Builder for `host`, with the remaining fields at their defaults:
    /// `GET`, `https`, no headers, no query, no body.
    pub fn builder(host: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder {
            scheme: None,
            host: host.into(),
            method: None,
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Compile this endpoint into a transport-ready request for `path`.
    ///
    /// Query pairs are appended in input order with duplicate names kept.
    /// Headers merge additively: a body's `additional_headers` never
    /// overwrite endpoint headers, both values are sent. A present,
    /// non-empty body is encoded here; any failure along the way is
    /// [`ApiError::InvalidRequest`].
    pub fn compile(&self, path: &str) -> Result<CompiledRequest, ApiError> {
        let mut url = Url::parse(&format!("{}://{}", self.scheme, self.host))
            .map_err(|_| ApiError::InvalidRequest)?;
        url.set_path(path);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            append_header(&mut headers, name, value)?;
        }

        let mut body = None;
        if let Some(encoder) = &self.body {
            if !encoder.is_empty() {
                for (name, value) in encoder.additional_headers() {
                    append_header(&mut headers, &name, &value)?;
                }
                body = Some(encoder.encode().map_err(|err| {
                    tracing::warn!("body encoding failed: {}", err);
                    ApiError::InvalidRequest
                })?);
            }
        }

        Ok(CompiledRequest {
            url,
            method: self.method.clone(),
            headers,
            body,
        })
    }
}

fn append_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), ApiError> {
    let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| ApiError::InvalidRequest)?;
    let value = HeaderValue::from_str(value).map_err(|_| ApiError::InvalidRequest)?;
    headers.append(name, value);
    Ok(())
}

/// Builder for [`Endpoint`] with explicit default values.
pub struct EndpointBuilder {
    scheme: Option<String>,
    host: String,
    method: Option<HttpMethod>,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Box<dyn HttpBody>>,
}

impl EndpointBuilder {
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set a single header. Endpoint header keys are unique; setting the
    /// same name twice keeps the later value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Append one query pair. Pairs keep their insertion order and
    /// duplicate names are allowed.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl HttpBody + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn build(self) -> Endpoint {
        Endpoint {
            scheme: self.scheme.unwrap_or_else(|| "https".to_string()),
            host: self.host,
            method: self.method.unwrap_or_default(),
            headers: self.headers,
            query: self.query,
            body: self.body,
        }
    }
}
