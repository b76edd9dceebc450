use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateServerDatabaseParams, ServerDatabase};

#[derive(Debug, Clone)]
pub struct ServerDatabases {
    gateway: Gateway,
}

impl ServerDatabases {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, server_id: u64, include: Option<&str>) -> Result<Page<ServerDatabase>, Error> {
        self.gateway.page(RequestConfig::get(path(server_id)).include(include))
    }

    pub fn get(&self, server_id: u64, database_id: u64, include: Option<&str>) -> Result<ServerDatabase, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{}/{database_id}", path(server_id))).include(include))
    }

    pub fn create(&self, server_id: u64, params: &CreateServerDatabaseParams) -> Result<ServerDatabase, Error> {
        self.gateway.single(RequestConfig::post(path(server_id)).json(params)?)
    }

    pub fn reset_password(&self, server_id: u64, database_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::post(format!(
            "{}/{database_id}/reset-password",
            path(server_id)
        )))
    }

    pub fn delete(&self, server_id: u64, database_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{database_id}", path(server_id))))
    }
}

fn path(server_id: u64) -> String {
    format!("/api/application/servers/{server_id}/databases")
}
