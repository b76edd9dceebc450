use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateRoleParams, ListRolesParams, Role, UpdateRoleParams};

const ROLES: &str = "/api/application/roles";

#[derive(Debug, Clone)]
pub struct Roles {
    gateway: Gateway,
}

impl Roles {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListRolesParams) -> Result<Page<Role>, Error> {
        self.gateway.page(RequestConfig::get(ROLES).query(params)?)
    }

    pub fn get(&self, role_id: u64, include: Option<&str>) -> Result<Role, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{ROLES}/{role_id}")).include(include))
    }

    pub fn create(&self, params: &CreateRoleParams) -> Result<Role, Error> {
        self.gateway.single(RequestConfig::post(ROLES).json(params)?)
    }

    pub fn update(&self, role_id: u64, params: &UpdateRoleParams) -> Result<Role, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{ROLES}/{role_id}")).json(params)?)
    }

    pub fn delete(&self, role_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{ROLES}/{role_id}")))
    }
}
