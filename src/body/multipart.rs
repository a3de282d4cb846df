//! Multipart/form-data bodies.

use std::collections::HashMap;

use uuid::Uuid;

use super::HttpBody;
use crate::error::BodyError;

/// Wire literal emitted when a file part carries no mime type. Existing
/// peers of this format expect these exact bytes.
const MIME_FALLBACK: &str = "content-type header";

/// One file part of a multipart body.
pub struct FilePart {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

/// `multipart/form-data` body.
///
/// Parts are emitted in input order: all name/value fields first, then
/// all file parts. The boundary is generated once per instance and every
/// part of that instance reuses it.
pub struct MultipartBody {
    values: Vec<(String, String)>,
    files: Vec<FilePart>,
    boundary: String,
}

impl MultipartBody {
    /// Fresh random boundary.
    pub fn new(values: Vec<(String, String)>, files: Vec<FilePart>) -> Self {
        Self::with_boundary(values, files, format!("Boundary-{}", Uuid::new_v4()))
    }

    /// Explicit boundary, for callers that need deterministic output.
    pub fn with_boundary(
        values: Vec<(String, String)>,
        files: Vec<FilePart>,
        boundary: impl Into<String>,
    ) -> Self {
        Self {
            values,
            files,
            boundary: boundary.into(),
        }
    }

    /// Convenience for order-insensitive callers.
    pub fn from_map(values: HashMap<String, String>, files: Vec<FilePart>) -> Self {
        Self::new(values.into_iter().collect(), files)
    }

    /// The boundary used by every part of this instance.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }
}

impl HttpBody for MultipartBody {
    fn is_empty(&self) -> bool {
        self.values.is_empty() && self.files.is_empty()
    }

    fn additional_headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={}", self.boundary),
        )])
    }

    fn encode(&self) -> Result<Vec<u8>, BodyError> {
        let mut body = Vec::new();
        let prefix = format!("--{}\r\n", self.boundary);

        for (name, value) in &self.values {
            body.extend_from_slice(prefix.as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            body.extend_from_slice(format!("{value}\r\n").as_bytes());
        }

        for file in &self.files {
            let mime = file.mime_type.as_deref().unwrap_or(MIME_FALLBACK);
            body.extend_from_slice(prefix.as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                    file.file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(format!("Content-Type: {mime}\r\n\r\n").as_bytes());
            body.extend_from_slice(&file.data);
            body.extend_from_slice(b"\r\n");
        }

        // Closing boundary, no trailing CRLF.
        body.extend_from_slice(format!("--{}--", self.boundary).as_bytes());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_layout() {
        let body = MultipartBody::with_boundary(
            vec![("field".to_string(), "v".to_string())],
            Vec::new(),
            "B",
        );
        let expected = b"--B\r\nContent-Disposition: form-data; name=\"field\"\r\n\r\nv\r\n--B--";
        assert_eq!(body.encode().unwrap(), expected);
    }

    #[test]
    fn single_file_layout() {
        let body = MultipartBody::with_boundary(
            Vec::new(),
            vec![FilePart {
                file_name: "a.png".to_string(),
                mime_type: Some("image/png".to_string()),
                data: vec![0x89, 0x50, 0x4E, 0x47],
            }],
            "B",
        );
        let mut expected: Vec<u8> = Vec::new();
        expected.extend_from_slice(
            b"--B\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.png\"\r\n",
        );
        expected.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        expected.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47]);
        expected.extend_from_slice(b"\r\n--B--");
        assert_eq!(body.encode().unwrap(), expected);
    }

    #[test]
    fn values_precede_files() {
        let body = MultipartBody::with_boundary(
            vec![("k".to_string(), "v".to_string())],
            vec![FilePart {
                file_name: "f.txt".to_string(),
                mime_type: Some("text/plain".to_string()),
                data: b"hi".to_vec(),
            }],
            "B",
        );
        let encoded = String::from_utf8(body.encode().unwrap()).unwrap();
        let field_at = encoded.find("name=\"k\"").unwrap();
        let file_at = encoded.find("filename=\"f.txt\"").unwrap();
        assert!(field_at < file_at);
    }

    #[test]
    fn missing_mime_type_uses_fallback_literal() {
        let body = MultipartBody::with_boundary(
            Vec::new(),
            vec![FilePart {
                file_name: "blob".to_string(),
                mime_type: None,
                data: vec![1],
            }],
            "B",
        );
        let encoded = String::from_utf8(body.encode().unwrap()).unwrap();
        assert!(encoded.contains("Content-Type: content-type header\r\n"));
    }

    #[test]
    fn empty_body_is_closing_boundary_only() {
        let body = MultipartBody::with_boundary(Vec::new(), Vec::new(), "B");
        assert!(body.is_empty());
        assert_eq!(body.encode().unwrap(), b"--B--");
    }

    #[test]
    fn one_file_part_makes_body_non_empty() {
        let body = MultipartBody::new(
            Vec::new(),
            vec![FilePart {
                file_name: "blob".to_string(),
                mime_type: None,
                data: vec![1],
            }],
        );
        assert!(!body.is_empty());
    }

    #[test]
    fn from_map_emits_the_single_field() {
        let body = MultipartBody::from_map(
            HashMap::from([("field".to_string(), "v".to_string())]),
            Vec::new(),
        );
        let encoded = String::from_utf8(body.encode().unwrap()).unwrap();
        assert!(encoded.contains("name=\"field\"\r\n\r\nv\r\n"));
    }

    #[test]
    fn boundary_is_reused_across_parts_and_header() {
        let body = MultipartBody::new(
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ],
            Vec::new(),
        );
        let boundary = body.boundary().to_string();
        let headers = body.additional_headers();
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some(format!("multipart/form-data; boundary={boundary}").as_str())
        );

        let encoded = String::from_utf8(body.encode().unwrap()).unwrap();
        let delimiter = format!("--{boundary}\r\n");
        assert_eq!(encoded.matches(&delimiter).count(), 2);
        assert!(encoded.ends_with(&format!("--{boundary}--")));
    }

    #[test]
    fn two_instances_differ_only_in_boundary() {
        let make = || {
            MultipartBody::new(vec![("field".to_string(), "v".to_string())], Vec::new())
        };
        let first = make();
        let second = make();
        assert_ne!(first.boundary(), second.boundary());

        let normalize = |body: &MultipartBody| {
            String::from_utf8(body.encode().unwrap())
                .unwrap()
                .replace(body.boundary(), "<boundary>")
        };
        assert_eq!(normalize(&first), normalize(&second));
    }
}
