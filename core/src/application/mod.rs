//! Accessors for the administrative API under `/api/application`.
//!
//! # Design
//! `Application` is a factory: each method returns a small accessor bound to
//! a clone of the shared `Gateway`. Accessors hold no state of their own, so
//! they are as cheap to create as they are to drop, and every operation is a
//! single request through `Gateway`.

mod allocations;
mod database_hosts;
mod eggs;
mod mounts;
mod nodes;
mod plugins;
mod roles;
mod server_databases;
mod servers;
mod users;

pub use allocations::Allocations;
pub use database_hosts::DatabaseHosts;
pub use eggs::Eggs;
pub use mounts::Mounts;
pub use nodes::Nodes;
pub use plugins::Plugins;
pub use roles::Roles;
pub use server_databases::ServerDatabases;
pub use servers::Servers;
pub use users::Users;

use crate::gateway::Gateway;

#[derive(Debug, Clone)]
pub struct Application {
    gateway: Gateway,
}

impl Application {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn users(&self) -> Users {
        Users::new(self.gateway.clone())
    }

    pub fn nodes(&self) -> Nodes {
        Nodes::new(self.gateway.clone())
    }

    pub fn allocations(&self) -> Allocations {
        Allocations::new(self.gateway.clone())
    }

    pub fn servers(&self) -> Servers {
        Servers::new(self.gateway.clone())
    }

    pub fn server_databases(&self) -> ServerDatabases {
        ServerDatabases::new(self.gateway.clone())
    }

    pub fn eggs(&self) -> Eggs {
        Eggs::new(self.gateway.clone())
    }

    pub fn database_hosts(&self) -> DatabaseHosts {
        DatabaseHosts::new(self.gateway.clone())
    }

    pub fn mounts(&self) -> Mounts {
        Mounts::new(self.gateway.clone())
    }

    pub fn roles(&self) -> Roles {
        Roles::new(self.gateway.clone())
    }

    pub fn plugins(&self) -> Plugins {
        Plugins::new(self.gateway.clone())
    }
}
