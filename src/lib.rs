//! netcall
//!
//! Declarative HTTP endpoints: describe an API call as plain data, compile
//! it into a wire-ready request, execute it through a pluggable transport,
//! and receive a typed value or a typed [`ApiError`] — never a raw
//! transport error.
//!
//! ```rust,ignore
//! use netcall::{ApiClient, Endpoint};
//!
//! let client = ApiClient::new();
//! let endpoint = Endpoint::builder("api.example.com")
//!     .query("userId", "1")
//!     .build();
//! let user: User = client.fetch(&endpoint, "/api/users").await?;
//! ```
#![deny(unsafe_code)]

pub mod body;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod transport;

pub use body::{FilePart, FormBody, HttpBody, JsonBody, MultipartBody, RawBody};
pub use client::{ApiClient, DecodeError};
pub use endpoint::{CompiledRequest, Endpoint, EndpointBuilder};
pub use error::{ApiError, ApiResult, BodyError};
pub use method::HttpMethod;
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
