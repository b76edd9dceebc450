//! Accessors for the user-facing API under `/api/client`.
//!
//! # Design
//! Same factory shape as the application side. Server-scoped accessors are
//! bound to one server identifier at construction, so `client.server(id)`
//! yields a value whose operations all target that server.

mod account;
mod server;

pub use account::{Account, ApiKeys, SshKeys};
pub use server::{Backups, Databases, Files, Network, Schedules, ServerApi, Settings, Startup, Subusers};

use serde::Deserialize;

use crate::envelope::{Page, Single};
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ClientServer, ListClientServersParams};

#[derive(Debug, Clone)]
pub struct ClientApi {
    gateway: Gateway,
}

#[derive(Deserialize)]
struct Permissions {
    permissions: Vec<String>,
}

impl ClientApi {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Servers the token's user can access. `scope` widens this for admins.
    pub fn list_servers(&self, params: &ListClientServersParams) -> Result<Page<ClientServer>, Error> {
        self.gateway.page(RequestConfig::get("/api/client").query(params)?)
    }

    /// Every permission key that can be granted to a subuser.
    pub fn list_permissions(&self) -> Result<Vec<String>, Error> {
        let envelope: Single<Permissions> = self.gateway.json(RequestConfig::get("/api/client/permissions"))?;
        Ok(envelope.attributes.permissions)
    }

    pub fn account(&self) -> Account {
        Account::new(self.gateway.clone())
    }

    /// Operations on one server, addressed by its short identifier or UUID.
    pub fn server(&self, server: &str) -> ServerApi {
        ServerApi::new(self.gateway.clone(), server)
    }
}
