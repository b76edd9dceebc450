//! `multipart/form-data` bodies for the upload endpoints (egg import,
//! plugin file import).
//!
//! Parts are collected as owned data and encoded eagerly through ureq's
//! `Form`, so the request stays plain bytes and any transport can send it.

use std::io::Read;

use ureq::unversioned::multipart::{Form, Part};

#[derive(Debug, Clone, Default)]
pub struct Multipart {
    parts: Vec<FormPart>,
}

#[derive(Debug, Clone)]
struct FormPart {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// An encoded form: the `Content-Type` header value (boundary included)
/// and the body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedForm {
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        });
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: impl Into<Vec<u8>>) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            data: data.into(),
        });
        self
    }

    /// Encode every part under a fresh random boundary.
    ///
    /// Fails only on an unparsable part content type.
    pub fn encode(&self) -> Result<EncodedForm, ureq::Error> {
        let mut form = Form::new();
        for part in &self.parts {
            let mut encoded = Part::bytes(&part.data);
            if let Some(filename) = &part.filename {
                encoded = encoded.file_name(filename);
            }
            if let Some(content_type) = &part.content_type {
                encoded = encoded.mime_str(content_type)?;
            }
            form = form.part(&part.name, encoded);
        }
        let content_type = format!("multipart/form-data; boundary={}", form.boundary());
        let mut body = Vec::new();
        form.read_to_end(&mut body)?;
        Ok(EncodedForm { content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary(encoded: &EncodedForm) -> &str {
        encoded
            .content_type
            .strip_prefix("multipart/form-data; boundary=")
            .expect("multipart content type")
    }

    #[test]
    fn encodes_file_part() {
        let encoded = Multipart::new()
            .file("import_file", "egg.json", "application/json", "{}")
            .encode()
            .unwrap();
        let boundary = boundary(&encoded);
        let body = String::from_utf8(encoded.body.clone()).unwrap();
        assert_eq!(
            body,
            format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"import_file\"; filename=\"egg.json\"\r\n\
                 Content-Type: application/json\r\n\
                 \r\n\
                 {{}}\r\n\
                 --{boundary}--\r\n"
            )
        );
    }

    #[test]
    fn text_part_has_no_content_type() {
        let encoded = Multipart::new().text("name", "value").encode().unwrap();
        let body = String::from_utf8(encoded.body).unwrap();
        assert!(body.contains("name=\"name\"\r\n\r\nvalue\r\n"));
        assert!(!body.contains("Content-Type"));
    }

    #[test]
    fn binary_data_is_kept_verbatim() {
        let archive = vec![0x50u8, 0x4b, 0x03, 0x04, 0x00, 0xff];
        let encoded = Multipart::new()
            .file("file", "plugin.zip", "application/zip", archive.clone())
            .encode()
            .unwrap();
        assert!(encoded.body.windows(archive.len()).any(|window| window == archive.as_slice()));
    }

    #[test]
    fn each_encoding_gets_a_fresh_boundary() {
        let form = Multipart::new().text("a", "b");
        let first = form.encode().unwrap();
        let second = form.encode().unwrap();
        assert_ne!(first.content_type, second.content_type);
    }

    #[test]
    fn invalid_part_content_type_is_an_error() {
        let result = Multipart::new().file("file", "x.bin", "not a mime type", vec![1u8]).encode();
        assert!(result.is_err());
    }
}
