use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{
    ApplicationServer, CreateServerParams, ListApplicationServersParams, StartTransferParams,
    UpdateServerBuildParams, UpdateServerDetailsParams, UpdateServerStartupParams,
};

const SERVERS: &str = "/api/application/servers";

/// Administrative server management.
#[derive(Debug, Clone)]
pub struct Servers {
    gateway: Gateway,
}

impl Servers {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListApplicationServersParams) -> Result<Page<ApplicationServer>, Error> {
        self.gateway.page(RequestConfig::get(SERVERS).query(params)?)
    }

    pub fn get(&self, server_id: u64, include: Option<&str>) -> Result<ApplicationServer, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{SERVERS}/{server_id}")).include(include))
    }

    pub fn get_by_external_id(&self, external_id: &str, include: Option<&str>) -> Result<ApplicationServer, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{SERVERS}/external/{external_id}")).include(include))
    }

    pub fn create(&self, params: &CreateServerParams) -> Result<ApplicationServer, Error> {
        self.gateway.single(RequestConfig::post(SERVERS).json(params)?)
    }

    pub fn update_details(&self, server_id: u64, params: &UpdateServerDetailsParams) -> Result<ApplicationServer, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{SERVERS}/{server_id}/details")).json(params)?)
    }

    pub fn update_build(&self, server_id: u64, params: &UpdateServerBuildParams) -> Result<ApplicationServer, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{SERVERS}/{server_id}/build")).json(params)?)
    }

    pub fn update_startup(&self, server_id: u64, params: &UpdateServerStartupParams) -> Result<ApplicationServer, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{SERVERS}/{server_id}/startup")).json(params)?)
    }

    pub fn suspend(&self, server_id: u64) -> Result<(), Error> {
        self.action(server_id, "suspend")
    }

    pub fn unsuspend(&self, server_id: u64) -> Result<(), Error> {
        self.action(server_id, "unsuspend")
    }

    pub fn reinstall(&self, server_id: u64) -> Result<(), Error> {
        self.action(server_id, "reinstall")
    }

    pub fn start_transfer(&self, server_id: u64, params: &StartTransferParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{SERVERS}/{server_id}/transfer")).json(params)?)
    }

    pub fn cancel_transfer(&self, server_id: u64) -> Result<(), Error> {
        self.action(server_id, "transfer/cancel")
    }

    pub fn delete(&self, server_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{SERVERS}/{server_id}")))
    }

    /// Delete even when the daemon cannot be reached.
    pub fn force_delete(&self, server_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{SERVERS}/{server_id}/force")))
    }

    fn action(&self, server_id: u64, action: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{SERVERS}/{server_id}/{action}")))
    }
}
