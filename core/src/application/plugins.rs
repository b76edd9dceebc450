use serde_json::json;

use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::multipart::Multipart;
use crate::request::RequestConfig;
use crate::types::{ListPluginsParams, Plugin};

const PLUGINS: &str = "/api/application/plugins";

#[derive(Debug, Clone)]
pub struct Plugins {
    gateway: Gateway,
}

impl Plugins {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self, params: &ListPluginsParams) -> Result<Page<Plugin>, Error> {
        self.gateway.page(RequestConfig::get(PLUGINS).query(params)?)
    }

    pub fn get(&self, plugin_id: u64) -> Result<Plugin, Error> {
        self.gateway.single(RequestConfig::get(format!("{PLUGINS}/{plugin_id}")))
    }

    pub fn install(&self, plugin_id: u64) -> Result<Plugin, Error> {
        self.action(plugin_id, "install")
    }

    pub fn update(&self, plugin_id: u64) -> Result<Plugin, Error> {
        self.action(plugin_id, "update")
    }

    /// With `delete_files` the plugin's directory is removed as well.
    pub fn uninstall(&self, plugin_id: u64, delete_files: bool) -> Result<Plugin, Error> {
        self.gateway.single(
            RequestConfig::post(format!("{PLUGINS}/{plugin_id}/uninstall")).json(&json!({ "delete": delete_files }))?,
        )
    }

    pub fn enable(&self, plugin_id: u64) -> Result<Plugin, Error> {
        self.action(plugin_id, "enable")
    }

    pub fn disable(&self, plugin_id: u64) -> Result<Plugin, Error> {
        self.action(plugin_id, "disable")
    }

    pub fn import_from_url(&self, url: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{PLUGINS}/import/url")).json(&json!({ "url": url }))?)
    }

    /// Upload a plugin archive.
    pub fn import_from_file(&self, archive: impl Into<Vec<u8>>, filename: &str) -> Result<(), Error> {
        let form = Multipart::new().file("file", filename, "application/zip", archive);
        self.gateway
            .empty(RequestConfig::post(format!("{PLUGINS}/import/file")).multipart(&form)?)
    }

    fn action(&self, plugin_id: u64, action: &str) -> Result<Plugin, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{PLUGINS}/{plugin_id}/{action}")))
    }
}
