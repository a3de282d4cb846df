//! URL-encoded form bodies.

use std::collections::HashMap;

use super::HttpBody;
use crate::error::BodyError;

/// `application/x-www-form-urlencoded` body.
///
/// Escaping is stricter than RFC 3986: only ASCII alphanumerics pass
/// through unescaped. Space, `-`, `.`, `_`, `~`, reserved characters and
/// non-ASCII bytes are all percent-escaped. Existing consumers of this
/// wire format rely on the strict form.
pub struct FormBody {
    values: Vec<(String, String)>,
}

impl FormBody {
    /// Ordered pairs, rendered in this order. Duplicate names are kept.
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    /// Convenience for order-insensitive callers.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self::new(values.into_iter().collect())
    }
}

impl HttpBody for FormBody {
    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn additional_headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded; charset=utf-8".to_string(),
        )])
    }

    fn encode(&self) -> Result<Vec<u8>, BodyError> {
        let pieces: Vec<String> = self
            .values
            .iter()
            .map(|(name, value)| format!("{}={}", percent_encode(name), percent_encode(value)))
            .collect();
        Ok(pieces.join("&").into_bytes())
    }
}

/// Percent-escape every byte that is not an ASCII alphanumeric.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_order_with_space_escaped() {
        let body = FormBody::new(vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2 c".to_string()),
        ]);
        assert_eq!(body.encode().unwrap(), b"a=1&b=2%20c");
    }

    #[test]
    fn escapes_everything_but_alphanumerics() {
        assert_eq!(percent_encode("a-b_c.d~e"), "a%2Db%5Fc%2Ed%7Ee");
        assert_eq!(percent_encode("née"), "n%C3%A9e");
    }

    #[test]
    fn duplicate_names_are_kept_in_order() {
        let body = FormBody::new(vec![
            ("tag".to_string(), "x".to_string()),
            ("tag".to_string(), "y".to_string()),
        ]);
        assert_eq!(body.encode().unwrap(), b"tag=x&tag=y");
    }

    #[test]
    fn empty_form_is_empty_and_encodes_to_nothing() {
        let body = FormBody::new(Vec::new());
        assert!(body.is_empty());
        assert_eq!(body.encode().unwrap(), b"");
    }

    #[test]
    fn from_map_renders_single_entry() {
        let body = FormBody::from_map(HashMap::from([("a".to_string(), "1".to_string())]));
        assert_eq!(body.encode().unwrap(), b"a=1");
    }

    #[test]
    fn sets_form_content_type() {
        let headers = FormBody::new(Vec::new()).additional_headers();
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded; charset=utf-8")
        );
    }
}
