use serde_json::json;

use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ApplicationServer, CreateMountParams, Egg, ListMountsParams, Mount, Node, UpdateMountParams};

const MOUNTS: &str = "/api/application/mounts";

/// Mounts and the eggs, nodes and servers they are attached to.
#[derive(Debug, Clone)]
pub struct Mounts {
    gateway: Gateway,
}

impl Mounts {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListMountsParams) -> Result<Page<Mount>, Error> {
        self.gateway.page(RequestConfig::get(MOUNTS).query(params)?)
    }

    pub fn get(&self, mount_id: u64, include: Option<&str>) -> Result<Mount, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{MOUNTS}/{mount_id}")).include(include))
    }

    pub fn create(&self, params: &CreateMountParams) -> Result<Mount, Error> {
        self.gateway.single(RequestConfig::post(MOUNTS).json(params)?)
    }

    pub fn update(&self, mount_id: u64, params: &UpdateMountParams) -> Result<Mount, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{MOUNTS}/{mount_id}")).json(params)?)
    }

    pub fn delete(&self, mount_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{MOUNTS}/{mount_id}")))
    }

    // --- eggs ---

    pub fn list_eggs(&self, mount_id: u64, include: Option<&str>) -> Result<Vec<Egg>, Error> {
        self.gateway
            .list(RequestConfig::get(format!("{MOUNTS}/{mount_id}/eggs")).include(include))
    }

    pub fn add_eggs(&self, mount_id: u64, eggs: &[u64]) -> Result<Mount, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{MOUNTS}/{mount_id}/eggs")).json(&json!({ "eggs": eggs }))?,
        )
    }

    pub fn remove_egg(&self, mount_id: u64, egg_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{MOUNTS}/{mount_id}/eggs/{egg_id}")))
    }

    // --- nodes ---

    pub fn list_nodes(&self, mount_id: u64, include: Option<&str>) -> Result<Vec<Node>, Error> {
        self.gateway
            .list(RequestConfig::get(format!("{MOUNTS}/{mount_id}/nodes")).include(include))
    }

    pub fn add_nodes(&self, mount_id: u64, nodes: &[u64]) -> Result<Mount, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{MOUNTS}/{mount_id}/nodes")).json(&json!({ "nodes": nodes }))?,
        )
    }

    pub fn remove_node(&self, mount_id: u64, node_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{MOUNTS}/{mount_id}/nodes/{node_id}")))
    }

    // --- servers ---

    pub fn list_servers(&self, mount_id: u64, include: Option<&str>) -> Result<Vec<ApplicationServer>, Error> {
        self.gateway
            .list(RequestConfig::get(format!("{MOUNTS}/{mount_id}/servers")).include(include))
    }

    pub fn add_servers(&self, mount_id: u64, servers: &[u64]) -> Result<Mount, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{MOUNTS}/{mount_id}/servers")).json(&json!({ "servers": servers }))?,
        )
    }

    pub fn remove_server(&self, mount_id: u64, server_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{MOUNTS}/{mount_id}/servers/{server_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{list, single, stub_gateway, StubTransport};

    fn mount_attributes() -> serde_json::Value {
        json!({
            "id": 2,
            "uuid": "7d7a2a39-6a2b-4c8e-8d0e-0f5d7f7b1a11",
            "name": "maps",
            "description": null,
            "source": "/srv/maps",
            "target": "/home/container/maps",
            "read_only": true,
            "user_mountable": false
        })
    }

    #[test]
    fn add_eggs_wraps_ids() {
        let (gateway, stub) = stub_gateway(StubTransport::json(200, single("mount", mount_attributes())));

        let mount = Mounts::new(gateway).add_eggs(2, &[4, 5]).unwrap();

        assert!(mount.read_only);
        assert_eq!(mount.created_at, None);
        assert_eq!(stub.last_request().url, "https://panel.example.com/api/application/mounts/2/eggs");
        assert_eq!(stub.last_json(), json!({"eggs": [4, 5]}));
    }

    #[test]
    fn list_nodes_is_unpaginated() {
        let (gateway, stub) = stub_gateway(StubTransport::json(200, list("node", vec![])));
        let nodes = Mounts::new(gateway).list_nodes(2, None).unwrap();
        assert!(nodes.is_empty());
        assert!(stub.last_request().query.is_empty());
    }

    #[test]
    fn remove_server_deletes_link() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        Mounts::new(gateway).remove_server(2, 12).unwrap();
        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "https://panel.example.com/api/application/mounts/2/servers/12");
    }
}
