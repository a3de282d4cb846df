//! HTTP method for an endpoint.

/// HTTP method, with `Other` as an escape hatch for nonstandard verbs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl HttpMethod {
    /// Canonical uppercase token sent on the wire.
    pub fn name(&self) -> String {
        match self {
            Self::Get => "GET".to_string(),
            Self::Post => "POST".to_string(),
            Self::Put => "PUT".to_string(),
            Self::Delete => "DELETE".to_string(),
            Self::Other(method) => method.to_uppercase(),
        }
    }
}
