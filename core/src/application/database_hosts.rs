use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateDatabaseHostParams, DatabaseHost, ListDatabaseHostsParams, UpdateDatabaseHostParams};

const DATABASE_HOSTS: &str = "/api/application/database-hosts";

#[derive(Debug, Clone)]
pub struct DatabaseHosts {
    gateway: Gateway,
}

impl DatabaseHosts {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListDatabaseHostsParams) -> Result<Page<DatabaseHost>, Error> {
        self.gateway.page(RequestConfig::get(DATABASE_HOSTS).query(params)?)
    }

    pub fn get(&self, host_id: u64, include: Option<&str>) -> Result<DatabaseHost, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{DATABASE_HOSTS}/{host_id}")).include(include))
    }

    pub fn create(&self, params: &CreateDatabaseHostParams) -> Result<DatabaseHost, Error> {
        self.gateway.single(RequestConfig::post(DATABASE_HOSTS).json(params)?)
    }

    pub fn update(&self, host_id: u64, params: &UpdateDatabaseHostParams) -> Result<DatabaseHost, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{DATABASE_HOSTS}/{host_id}")).json(params)?)
    }

    pub fn delete(&self, host_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{DATABASE_HOSTS}/{host_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{single, stub_gateway, StubTransport};
    use serde_json::json;

    #[test]
    fn update_patches_only_given_fields() {
        let attributes = json!({
            "id": 1, "name": "primary", "host": "db.internal", "port": 3307, "username": "pelican",
            "node": null, "created_at": "2024-01-01T00:00:00+00:00", "updated_at": "2024-01-02T00:00:00+00:00"
        });
        let (gateway, stub) = stub_gateway(StubTransport::json(200, single("database_host", attributes)));
        let params = UpdateDatabaseHostParams {
            port: Some(3307),
            node: Some(None),
            ..Default::default()
        };

        let host = DatabaseHosts::new(gateway).update(1, &params).unwrap();

        assert_eq!(host.port, 3307);
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.url, "https://panel.example.com/api/application/database-hosts/1");
        assert_eq!(stub.last_json(), json!({"port": 3307, "node": null}));
    }
}
