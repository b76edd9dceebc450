//! Per-call request configuration handed to the gateway.

use serde::Serialize;

use crate::error::Error;
use crate::http::{set_header, HttpMethod};
use crate::multipart::Multipart;
use crate::query;

/// Method, path, query, body and header overrides for one call.
///
/// `path` is relative to the panel base URL and must start with `/`.
/// Headers set here win over the gateway defaults, key by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestConfig {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append every field of `params` as query pairs.
    pub fn query<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, Error> {
        let pairs = query::to_pairs(params).map_err(Error::Encode)?;
        self.query.extend(pairs);
        Ok(self)
    }

    pub fn query_pair(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `include=...` when a relationship list is given.
    pub fn include(self, include: Option<&str>) -> Self {
        match include {
            Some(include) => self.query_pair("include", include),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        set_header(&mut self.headers, name, value);
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_vec(body).map_err(Error::Encode)?);
        Ok(self)
    }

    /// Send `content` verbatim as `text/plain`.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.body = Some(content.into().into_bytes());
        self.header("Content-Type", "text/plain")
    }

    /// Encode `form` as the body and set its boundary content type.
    pub fn multipart(mut self, form: &Multipart) -> Result<Self, Error> {
        let encoded = form.encode().map_err(Error::Form)?;
        self.body = Some(encoded.body);
        Ok(self.header("Content-Type", &encoded.content_type))
    }
}
