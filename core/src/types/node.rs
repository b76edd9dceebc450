use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::ListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAllocatedResources {
    pub memory: u64,
    pub disk: u64,
    pub cpu: u64,
}

/// A daemon node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub uuid: Uuid,
    pub public: bool,
    pub name: String,
    pub description: Option<String>,
    pub fqdn: String,
    pub scheme: Scheme,
    pub behind_proxy: bool,
    pub maintenance_mode: bool,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    pub cpu: u64,
    pub cpu_overallocate: i64,
    pub upload_size: u64,
    pub daemon_listen: u16,
    pub daemon_connect: u16,
    pub daemon_sftp: u16,
    pub daemon_sftp_alias: Option<String>,
    pub daemon_base: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub allocated_resources: NodeAllocatedResources,
    pub created_at: String,
    pub updated_at: String,
}

/// The daemon configuration document. Returned without an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfiguration {
    pub debug: bool,
    pub uuid: Uuid,
    pub token_id: String,
    pub token: String,
    pub api: NodeApiConfiguration,
    pub system: NodeSystemConfiguration,
    #[serde(default)]
    pub allowed_mounts: Vec<String>,
    pub remote: String,
    /// Anything the panel adds beyond the fields above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeApiConfiguration {
    pub host: String,
    pub port: u16,
    pub ssl: NodeSslConfiguration,
    pub upload_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSslConfiguration {
    pub enabled: bool,
    pub cert: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSystemConfiguration {
    pub data: String,
    pub sftp: NodeSftpConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSftpConfiguration {
    pub bind_port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListNodesParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[uuid]", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "filter[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "filter[fqdn]", skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(rename = "filter[daemon_token_id]", skip_serializing_if = "Option::is_none")]
    pub daemon_token_id: Option<String>,
}

/// Resource requirements used to find nodes that can host a new server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployableNodesParams {
    pub memory: u64,
    pub disk: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u64>,
    #[serde(rename = "tags[]", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateNodeParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    pub fqdn: String,
    pub scheme: Scheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    pub cpu: u64,
    pub cpu_overallocate: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
    pub daemon_sftp: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_sftp_alias: Option<String>,
    pub daemon_listen: u16,
    pub daemon_connect: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateNodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_sftp: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_sftp_alias: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_listen: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_connect: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    /// Regenerate the daemon token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_secret: Option<bool>,
}
