use serde_json::json;

use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    gateway: Gateway,
    path: String,
}

impl Settings {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/settings"),
        }
    }

    pub fn rename(&self, name: &str) -> Result<(), Error> {
        self.gateway.empty(
            RequestConfig::post(format!("{}/rename", self.path)).json(&json!({ "name": name }))?,
        )
    }

    /// `None` clears the description.
    pub fn update_description(&self, description: Option<&str>) -> Result<(), Error> {
        self.gateway.empty(
            RequestConfig::post(format!("{}/description", self.path)).json(&json!({ "description": description }))?,
        )
    }

    pub fn reinstall(&self) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/reinstall", self.path)))
    }

    /// Must be one of the images the server's egg allows.
    pub fn set_docker_image(&self, image: &str) -> Result<(), Error> {
        self.gateway.empty(
            RequestConfig::put(format!("{}/docker-image", self.path)).json(&json!({ "docker_image": image }))?,
        )
    }
}
