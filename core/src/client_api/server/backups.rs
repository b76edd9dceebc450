use serde_json::json;

use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{Backup, CreateBackupParams, RestoreBackupParams, SignedUrl};

#[derive(Debug, Clone)]
pub struct Backups {
    gateway: Gateway,
    path: String,
}

impl Backups {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/backups"),
        }
    }

    pub fn list(&self, per_page: Option<u32>) -> Result<Page<Backup>, Error> {
        let mut config = RequestConfig::get(self.path.as_str());
        if let Some(per_page) = per_page {
            config = config.query_pair("per_page", per_page);
        }
        self.gateway.page(config)
    }

    pub fn get(&self, backup_uuid: &str) -> Result<Backup, Error> {
        self.gateway
            .single(RequestConfig::get(format!("{}/{backup_uuid}", self.path)))
    }

    /// Start a backup. An all-`None` params value sends `{}`.
    pub fn create(&self, params: &CreateBackupParams) -> Result<Backup, Error> {
        self.gateway.single(RequestConfig::post(self.path.as_str()).json(params)?)
    }

    pub fn delete(&self, backup_uuid: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{backup_uuid}", self.path)))
    }

    pub fn download_url(&self, backup_uuid: &str) -> Result<String, Error> {
        self.gateway
            .single::<SignedUrl>(RequestConfig::get(format!("{}/{backup_uuid}/download", self.path)))
            .map(|signed| signed.url)
    }

    pub fn rename(&self, backup_uuid: &str, name: &str) -> Result<Backup, Error> {
        self.gateway.single(
            RequestConfig::put(format!("{}/{backup_uuid}/rename", self.path)).json(&json!({ "name": name }))?,
        )
    }

    /// Flip the lock; locked backups cannot be deleted.
    pub fn toggle_lock(&self, backup_uuid: &str) -> Result<Backup, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{}/{backup_uuid}/lock", self.path)))
    }

    pub fn restore(&self, backup_uuid: &str, params: &RestoreBackupParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::post(format!("{}/{backup_uuid}/restore", self.path)).json(params)?)
    }
}
