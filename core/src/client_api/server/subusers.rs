use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{CreateSubuserParams, Subuser, UpdateSubuserParams};

#[derive(Debug, Clone)]
pub struct Subusers {
    gateway: Gateway,
    path: String,
}

impl Subusers {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/users"),
        }
    }

    pub fn list(&self) -> Result<Vec<Subuser>, Error> {
        self.gateway.list(RequestConfig::get(self.path.as_str()))
    }

    pub fn get(&self, user_uuid: &str) -> Result<Subuser, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{}/{user_uuid}", self.path)))
    }

    /// Invite by email; the panel creates the account if it does not exist.
    pub fn create(&self, params: &CreateSubuserParams) -> Result<Subuser, Error> {
        self.gateway.single(RequestConfig::post(self.path.as_str()).json(params)?)
    }

    /// Replaces the subuser's permission set.
    pub fn update(&self, user_uuid: &str, params: &UpdateSubuserParams) -> Result<Subuser, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/{user_uuid}", self.path)).json(params)?)
    }

    pub fn delete(&self, user_uuid: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{user_uuid}", self.path)))
    }
}
