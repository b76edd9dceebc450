//! The single request path every resource accessor goes through.
//!
//! # Design
//! `Gateway` holds the normalized base URL, the bearer token and a shared
//! `Transport`; it carries no mutable state, so clones are cheap and can be
//! used from any number of threads. Each call is split the same way as the
//! rest of the crate: `build` produces an `HttpRequest` (pure), the transport
//! performs the exchange, and `classify` turns a non-2xx response into an
//! `ApiError`. The typed helpers (`single`, `list`, `page`, ...) decode the
//! body and apply the matching envelope unwrap.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::envelope::{self, List, Page, Paginated, Single};
use crate::error::{ApiError, Error};
use crate::http::{set_header, HttpRequest, HttpResponse};
use crate::request::RequestConfig;
use crate::transport::Transport;

#[derive(Clone)]
pub struct Gateway {
    base_url: Arc<str>,
    token: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl Gateway {
    /// `base_url` is used verbatim; normalization happens in `PelicanClient`.
    pub fn new(base_url: &str, token: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: Arc::from(base_url),
            token: Arc::from(token),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a call into a concrete request without touching the network.
    pub fn build(&self, config: RequestConfig) -> HttpRequest {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Bearer {}", self.token)),
        ];
        for (name, value) in &config.headers {
            set_header(&mut headers, name, value);
        }
        HttpRequest {
            method: config.method,
            url: format!("{}{}", self.base_url, config.path),
            query: config.query,
            headers,
            body: config.body,
        }
    }

    /// Perform one exchange. Non-2xx responses become `Error::Api`; a
    /// missing response is returned as `Error::Transport` unchanged.
    pub fn execute(&self, config: RequestConfig) -> Result<HttpResponse, Error> {
        let request = self.build(config);
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(&request).map_err(Error::Transport)?;
        debug!(status = response.status, url = %request.url, "received response");
        classify(response).map_err(|err| {
            warn!(status = err.status(), url = %request.url, message = err.message(), "panel rejected request");
            Error::Api(err)
        })
    }

    /// Decode the body as `T` with no envelope handling.
    pub fn json<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<T, Error> {
        parse_json(&self.execute(config)?)
    }

    pub fn single<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<T, Error> {
        self.json::<Single<T>>(config).map(envelope::unwrap_single)
    }

    pub fn list<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<Vec<T>, Error> {
        self.json::<List<T>>(config).map(envelope::unwrap_list)
    }

    pub fn page<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<Page<T>, Error> {
        self.json::<Paginated<T>>(config).map(envelope::unwrap_page)
    }

    /// Return the body as text (lossy for invalid UTF-8).
    pub fn text(&self, config: RequestConfig) -> Result<String, Error> {
        let response = self.execute(config)?;
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    /// Success is the absence of an error; any body is ignored.
    pub fn empty(&self, config: RequestConfig) -> Result<(), Error> {
        self.execute(config).map(|_| ())
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Map a non-2xx response to an `ApiError`.
pub fn classify(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::from_response(response.status, &response.body))
}

pub fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
        status: response.status,
        source,
    })
}
