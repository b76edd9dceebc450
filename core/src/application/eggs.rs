use crate::error::Error;
use crate::gateway::Gateway;
use crate::multipart::Multipart;
use crate::request::RequestConfig;
use crate::types::{Egg, EggExportFormat, ListEggsParams};

const EGGS: &str = "/api/application/eggs";

/// Server templates. The list endpoint is not paginated.
#[derive(Debug, Clone)]
pub struct Eggs {
    gateway: Gateway,
}

impl Eggs {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListEggsParams) -> Result<Vec<Egg>, Error> {
        self.gateway.list(RequestConfig::get(EGGS).query(params)?)
    }

    pub fn get(&self, egg_id: u64, include: Option<&str>) -> Result<Egg, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{EGGS}/{egg_id}")).include(include))
    }

    pub fn delete(&self, egg_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{EGGS}/{egg_id}")))
    }

    pub fn delete_by_uuid(&self, uuid: &str) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{EGGS}/uuid/{uuid}")))
    }

    /// The egg definition as a YAML or JSON document, returned verbatim.
    pub fn export(&self, egg_id: u64, format: EggExportFormat) -> Result<String, Error> {
        let config = RequestConfig::get(format!("{EGGS}/{egg_id}/export"))
            .query_pair("format", format.as_str())
            .header("Accept", format.accept());
        self.gateway.text(config)
    }

    /// Import an egg from its exported document, uploaded as `egg.json`.
    pub fn import(&self, content: &str) -> Result<Egg, Error> {
        let form = Multipart::new().file("import_file", "egg.json", "application/json", content.as_bytes());
        self.gateway
            .single(RequestConfig::post(format!("{EGGS}/import")).multipart(&form)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pairs, sorted_query, stub_gateway, StubTransport};

    #[test]
    fn export_overrides_accept_for_yaml() {
        let (gateway, stub) = stub_gateway(StubTransport::text(200, "name: Paper\n"));

        let document = Eggs::new(gateway).export(4, EggExportFormat::Yaml).unwrap();

        assert_eq!(document, "name: Paper\n");
        let request = stub.last_request();
        assert_eq!(request.url, "https://panel.example.com/api/application/eggs/4/export");
        assert_eq!(request.header("Accept"), Some("application/x-yaml"));
        assert_eq!(sorted_query(&request), pairs(&[("format", "yaml")]));
    }

    #[test]
    fn export_json_keeps_json_accept() {
        let (gateway, stub) = stub_gateway(StubTransport::text(200, "{}"));
        Eggs::new(gateway).export(4, EggExportFormat::Json).unwrap();
        assert_eq!(stub.last_request().header("Accept"), Some("application/json"));
    }

    #[test]
    fn import_uploads_multipart_file() {
        // The reply is not an egg, so decoding fails; only the request matters here.
        let (gateway, stub) = stub_gateway(StubTransport::json(200, serde_json::json!({})));
        let _ = Eggs::new(gateway).import("{\"name\":\"Paper\"}");

        let request = stub.last_request();
        let content_type = request.header("Content-Type").unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        let body = String::from_utf8(request.body.unwrap()).unwrap();
        assert!(body.contains("name=\"import_file\"; filename=\"egg.json\""));
        assert!(body.contains("{\"name\":\"Paper\"}"));
    }

    #[test]
    fn delete_by_uuid_uses_uuid_path() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        Eggs::new(gateway).delete_by_uuid("9f0c").unwrap();
        assert_eq!(stub.last_request().url, "https://panel.example.com/api/application/eggs/uuid/9f0c");
    }
}
