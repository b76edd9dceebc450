//! Verify request building, envelope unwrapping and error classification
//! against the JSON test vectors stored in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON and query pairs are compared sorted,
//! so field ordering never causes false negatives.

use std::sync::{Arc, Mutex};

use pelican_core::envelope::{unwrap_page, Paginated};
use pelican_core::types::{ListParams, ListUsersParams, PowerSignal};
use pelican_core::{ApiError, Error, HttpRequest, HttpResponse, PelicanClient, Transport, TransportError};
use serde::Deserialize;
use serde_json::Value;

/// Records every request and fails it, so only request building is observed.
#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl Recorder {
    fn take(&self) -> HttpRequest {
        let mut requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

impl Transport for Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        Err("recorded".into())
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key].as_str().unwrap_or_else(|| panic!("missing string field {key}"))
}

fn u64_field(value: &Value, key: &str) -> u64 {
    value[key].as_u64().unwrap_or_else(|| panic!("missing number field {key}"))
}

/// Run the operation a vector names against `client`.
fn dispatch(client: &PelicanClient, operation: &str, input: &Value) -> Result<(), Error> {
    let application = client.application();
    let client_api = client.client();
    match operation {
        "application.users.get" => application
            .users()
            .get(u64_field(input, "id"), input["include"].as_str())
            .map(drop),
        "application.users.list" => application
            .users()
            .list(&ListUsersParams {
                list: ListParams {
                    page: input["page"].as_u64().map(|page| page as u32),
                    ..ListParams::default()
                },
                email: input["email"].as_str().map(str::to_string),
                ..ListUsersParams::default()
            })
            .map(drop),
        "application.users.delete" => application.users().delete(u64_field(input, "id")),
        "application.nodes.configuration" => application.nodes().configuration(u64_field(input, "id")).map(drop),
        "client.server.send_command" => client_api
            .server(str_field(input, "server"))
            .send_command(str_field(input, "command")),
        "client.server.send_power" => {
            let signal: PowerSignal = serde_json::from_value(input["signal"].clone()).unwrap();
            client_api.server(str_field(input, "server")).send_power(signal)
        }
        "client.server.files.contents" => client_api
            .server(str_field(input, "server"))
            .files()
            .contents(str_field(input, "file"))
            .map(drop),
        "client.server.backups.list" => client_api
            .server(str_field(input, "server"))
            .backups()
            .list(input["per_page"].as_u64().map(|per_page| per_page as u32))
            .map(drop),
        "client.account.api_keys.delete" => client_api
            .account()
            .api_keys()
            .delete(str_field(input, "identifier")),
        other => panic!("unknown operation: {other}"),
    }
}

fn sorted_pairs(pairs: &[(String, String)]) -> Vec<(String, String)> {
    let mut pairs = pairs.to_vec();
    pairs.sort();
    pairs
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = str_field(&vectors, "base_url");

    let recorder = Recorder::default();
    let client = PelicanClient::with_transport(base_url, "vector-token", recorder.clone());

    for case in vectors["cases"].as_array().unwrap() {
        let name = str_field(case, "name");
        let expected = &case["expected_request"];

        let err = dispatch(&client, str_field(case, "operation"), &case["input"]).unwrap_err();
        assert!(err.is_transport(), "{name}: expected the recorder's failure");

        let req = recorder.take();
        assert_eq!(req.method.as_str(), str_field(expected, "method"), "{name}: method");
        assert_eq!(req.url, format!("{base_url}{}", str_field(expected, "path")), "{name}: url");
        assert_eq!(req.header("Authorization"), Some("Bearer vector-token"), "{name}: auth");
        assert!(req.header("Accept").is_some(), "{name}: accept");

        let expected_query: Vec<(String, String)> = serde_json::from_value(expected["query"].clone()).unwrap();
        assert_eq!(sorted_pairs(&req.query), sorted_pairs(&expected_query), "{name}: query");

        match &expected["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: unexpected body"),
            body => {
                let sent: Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&sent, body, "{name}: body");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Entity {
    id: u64,
}

#[test]
fn envelope_test_vectors() {
    let raw = include_str!("../../test-vectors/envelopes.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = str_field(case, "name");
        let expected = &case["expected"];

        let envelope: Paginated<Entity> = serde_json::from_value(case["body"].clone())
            .unwrap_or_else(|err| panic!("{name}: envelope did not parse: {err}"));
        let page = unwrap_page(envelope);

        let ids: Vec<u64> = page.data.iter().map(|entity| entity.id).collect();
        let expected_ids: Vec<u64> = serde_json::from_value(expected["ids"].clone()).unwrap();
        assert_eq!(ids, expected_ids, "{name}: ids");
        assert_eq!(page.pagination().total, u64_field(expected, "total"), "{name}: total");
        assert_eq!(page.has_next(), expected["has_next"].as_bool().unwrap(), "{name}: has_next");
        assert_eq!(page.pagination().links.next.as_deref(), expected["next"].as_str(), "{name}: next");
        assert_eq!(
            page.pagination().links.previous.as_deref(),
            expected["previous"].as_str(),
            "{name}: previous"
        );
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = str_field(case, "name");
        let expected = &case["expected"];
        let status = u64_field(case, "status") as u16;

        let err = ApiError::from_response(status, str_field(case, "body").as_bytes());
        assert_eq!(err.status(), status, "{name}: status");
        assert_eq!(err.message(), str_field(expected, "message"), "{name}: message");
        assert_eq!(err.to_string(), str_field(expected, "message"), "{name}: display");
        assert_eq!(err.errors().len() as u64, u64_field(expected, "entries"), "{name}: entries");

        for field in expected["fields"].as_array().unwrap() {
            let field = field.as_str().unwrap();
            assert!(err.field_error(field).is_some(), "{name}: no error for {field}");
        }
    }
}
