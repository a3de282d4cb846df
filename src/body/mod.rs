//! Request body encoders.
//!
//! Each encoder turns a logical payload into wire bytes plus the headers
//! that payload requires. Encoding is pure: the same instance always
//! produces the same bytes, and an empty body contributes neither bytes
//! nor headers to the compiled request.

mod form;
mod multipart;

pub use form::FormBody;
pub use multipart::{FilePart, MultipartBody};

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BodyError;

/// Capability set shared by all body encoders.
pub trait HttpBody: Send + Sync {
    /// Whether the body has no content.
    fn is_empty(&self) -> bool {
        false
    }

    /// Headers this body requires on the request (e.g. `Content-Type`).
    fn additional_headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Encode the payload into wire bytes.
    fn encode(&self) -> Result<Vec<u8>, BodyError>;
}

/// Opaque bytes sent verbatim.
pub struct RawBody {
    data: Vec<u8>,
    headers: HashMap<String, String>,
}

impl RawBody {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            headers: HashMap::new(),
        }
    }

    /// Raw bytes plus caller-supplied headers.
    pub fn with_headers(data: Vec<u8>, headers: HashMap<String, String>) -> Self {
        Self { data, headers }
    }
}

impl HttpBody for RawBody {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn additional_headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    fn encode(&self) -> Result<Vec<u8>, BodyError> {
        Ok(self.data.clone())
    }
}

/// A JSON payload.
///
/// Serialization is deferred behind an erased closure so that a failing
/// payload surfaces as an encoding error at compile time of the request,
/// not as a construction panic.
pub struct JsonBody {
    encode: Box<dyn Fn() -> Result<Vec<u8>, serde_json::Error> + Send + Sync>,
}

impl JsonBody {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Self {
            encode: Box::new(move || serde_json::to_vec(&value)),
        }
    }
}

impl HttpBody for JsonBody {
    fn additional_headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            "Content-Type".to_string(),
            "application/json; charset=utf-8".to_string(),
        )])
    }

    fn encode(&self) -> Result<Vec<u8>, BodyError> {
        (self.encode)().map_err(Into::into)
    }
}
