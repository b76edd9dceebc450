//! Recording transport used by the unit tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::TransportError;
use crate::gateway::Gateway;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub(crate) const BASE_URL: &str = "https://panel.example.com";
pub(crate) const TOKEN: &str = "test-token";

pub(crate) struct StubTransport {
    reply: Option<HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn json(status: u16, body: Value) -> Self {
        Self::reply(status, "application/json", body.to_string().into_bytes())
    }

    pub(crate) fn text(status: u16, body: &str) -> Self {
        Self::reply(status, "text/plain", body.as_bytes().to_vec())
    }

    pub(crate) fn empty(status: u16) -> Self {
        Self::reply(status, "text/plain", Vec::new())
    }

    /// Fails every request as if the connection was refused.
    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn reply(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            reply: Some(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), content_type.to_string())],
                body,
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Body of the last request parsed as JSON.
    pub(crate) fn last_json(&self) -> Value {
        let request = self.last_request();
        serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Some(response) => Ok(response.clone()),
            None => Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

/// Query pairs of `request`, sorted so assertions do not depend on field order.
pub(crate) fn sorted_query(request: &HttpRequest) -> Vec<(String, String)> {
    let mut pairs = request.query.clone();
    pairs.sort();
    pairs
}

/// Owned pairs from string literals, sorted like `sorted_query`.
pub(crate) fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = expected
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    pairs.sort();
    pairs
}

pub(crate) fn stub_gateway(stub: StubTransport) -> (Gateway, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    let gateway = Gateway::new(BASE_URL, TOKEN, stub.clone());
    (gateway, stub)
}

/// `{object, attributes}` envelope around `attributes`.
pub(crate) fn single(object: &str, attributes: Value) -> Value {
    serde_json::json!({ "object": object, "attributes": attributes })
}

/// Unpaginated list envelope.
pub(crate) fn list(object: &str, items: Vec<Value>) -> Value {
    let data: Vec<Value> = items.into_iter().map(|item| single(object, item)).collect();
    serde_json::json!({ "object": "list", "data": data })
}

/// Single-page paginated envelope.
pub(crate) fn paginated(object: &str, items: Vec<Value>) -> Value {
    let count = items.len();
    let mut envelope = list(object, items);
    envelope["meta"] = serde_json::json!({
        "pagination": {
            "total": count, "count": count, "per_page": 50,
            "current_page": 1, "total_pages": 1, "links": {}
        }
    });
    envelope
}

/// Attributes of an application user as the panel renders them.
pub(crate) fn user_attributes(id: u64, email: &str) -> Value {
    serde_json::json!({
        "id": id,
        "external_id": null,
        "is_managed_externally": false,
        "uuid": "c4022c6c-9bf1-4a23-bff9-519cceb38335",
        "username": email.split('@').next().unwrap_or(email),
        "email": email,
        "language": "en",
        "root_admin": false,
        "2fa_enabled": false,
        "2fa": false,
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-01T00:00:00+00:00"
    })
}

pub(crate) fn role_attributes(id: u64, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-01-01T00:00:00+00:00"
    })
}
