use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{Allocation, CreateAllocationsParams, ListAllocationsParams};

/// IP/port allocations of a node.
#[derive(Debug, Clone)]
pub struct Allocations {
    gateway: Gateway,
}

impl Allocations {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, node_id: u64, params: &ListAllocationsParams) -> Result<Page<Allocation>, Error> {
        self.gateway.page(RequestConfig::get(path(node_id)).query(params)?)
    }

    /// `ports` entries may be single ports or ranges such as `"25565-25570"`.
    pub fn create(&self, node_id: u64, params: &CreateAllocationsParams) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::post(path(node_id)).json(params)?)
    }

    pub fn delete(&self, node_id: u64, allocation_id: u64) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{allocation_id}", path(node_id))))
    }
}

fn path(node_id: u64) -> String {
    format!("/api/application/nodes/{node_id}/allocations")
}
