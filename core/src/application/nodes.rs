use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateNodeParams, DeployableNodesParams, ListNodesParams, Node, NodeConfiguration, UpdateNodeParams};

const NODES: &str = "/api/application/nodes";

#[derive(Debug, Clone)]
pub struct Nodes {
    gateway: Gateway,
}

impl Nodes {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListNodesParams) -> Result<Page<Node>, Error> {
        self.gateway.page(RequestConfig::get(NODES).query(params)?)
    }

    pub fn get(&self, node_id: u64, include: Option<&str>) -> Result<Node, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{NODES}/{node_id}")).include(include))
    }

    /// Nodes with enough free memory and disk to host a new server.
    pub fn deployable(&self, params: &DeployableNodesParams) -> Result<Page<Node>, Error> {
        self.gateway
            .page(RequestConfig::get(format!("{NODES}/deployable")).query(params)?)
    }

    /// The daemon's configuration document. Not wrapped in an envelope.
    pub fn configuration(&self, node_id: u64) -> Result<NodeConfiguration, Error> {
        self.gateway
            .json(RequestConfig::get(format!("{NODES}/{node_id}/configuration")))
    }

    pub fn create(&self, params: &CreateNodeParams) -> Result<Node, Error> {
        self.gateway.single(RequestConfig::post(NODES).json(params)?)
    }

    pub fn update(&self, node_id: u64, params: &UpdateNodeParams) -> Result<Node, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{NODES}/{node_id}")).json(params)?)
    }

    pub fn delete(&self, node_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{NODES}/{node_id}")))
    }
}
