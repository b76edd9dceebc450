use serde_json::json;

use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::ClientAllocation;

/// The server's port allocations.
#[derive(Debug, Clone)]
pub struct Network {
    gateway: Gateway,
    path: String,
}

impl Network {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/network/allocations"),
        }
    }

    pub fn list(&self) -> Result<Vec<ClientAllocation>, Error> {
        self.gateway.list(RequestConfig::get(self.path.as_str()))
    }

    /// Assign one more allocation, picked by the panel.
    pub fn create(&self) -> Result<ClientAllocation, Error> {
        self.gateway.single(RequestConfig::post(self.path.as_str()))
    }

    /// `None` clears the notes.
    pub fn update(&self, allocation_id: u64, notes: Option<&str>) -> Result<ClientAllocation, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{}/{allocation_id}", self.path)).json(&json!({ "notes": notes }))?,
        )
    }

    pub fn set_primary(&self, allocation_id: u64) -> Result<ClientAllocation, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/{allocation_id}/primary", self.path)))
    }

    pub fn delete(&self, allocation_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{allocation_id}", self.path)))
    }
}
