use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ApplicationUser, AssignRolesParams, CreateUserParams, ListUsersParams, UpdateUserParams};

const USERS: &str = "/api/application/users";

/// Panel user management.
#[derive(Debug, Clone)]
pub struct Users {
    gateway: Gateway,
}

impl Users {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListUsersParams) -> Result<Page<ApplicationUser>, Error> {
        self.gateway.page(RequestConfig::get(USERS).query(params)?)
    }

    pub fn get(&self, user_id: u64, include: Option<&str>) -> Result<ApplicationUser, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{USERS}/{user_id}")).include(include))
    }

    pub fn get_by_external_id(&self, external_id: &str, include: Option<&str>) -> Result<ApplicationUser, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{USERS}/external/{external_id}")).include(include))
    }

    pub fn create(&self, params: &CreateUserParams) -> Result<ApplicationUser, Error> {
        self.gateway.single(RequestConfig::post(USERS).json(params)?)
    }

    pub fn update(&self, user_id: u64, params: &UpdateUserParams) -> Result<ApplicationUser, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{USERS}/{user_id}")).json(params)?)
    }

    pub fn delete(&self, user_id: u64) -> Result<(), Error> {
        self.gateway.empty(RequestConfig::delete(format!("{USERS}/{user_id}")))
    }

    pub fn assign_roles(&self, user_id: u64, params: &AssignRolesParams) -> Result<ApplicationUser, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{USERS}/{user_id}/roles/assign")).json(params)?)
    }

    pub fn remove_roles(&self, user_id: u64, params: &AssignRolesParams) -> Result<ApplicationUser, Error> {
        self.gateway
            .single(RequestConfig::patch(format!("{USERS}/{user_id}/roles/remove")).json(params)?)
    }
}
