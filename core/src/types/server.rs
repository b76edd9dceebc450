use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::ListParams;

/// Lifecycle state reported for a server; `None` on the entity means "ready".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Installing,
    Running,
    Suspended,
    Stopping,
    Stopped,
    InstallFailed,
    ReinstallFailed,
    RestoringBackup,
    Transferring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerLimits {
    pub memory: u64,
    pub swap: i64,
    pub disk: u64,
    pub io: u64,
    pub cpu: u64,
    pub threads: Option<String>,
    #[serde(default)]
    pub oom_killer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFeatureLimits {
    pub databases: Option<u32>,
    pub allocations: Option<u32>,
    pub backups: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerContainer {
    pub startup_command: String,
    pub image: String,
    #[serde(default)]
    pub environment: BTreeMap<String, Value>,
}

/// A server as seen by the application API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationServer {
    pub id: u64,
    pub external_id: Option<String>,
    pub uuid: Uuid,
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<ServerStatus>,
    pub limits: ServerLimits,
    pub feature_limits: ServerFeatureLimits,
    pub user: u64,
    pub node: u64,
    pub allocation: u64,
    pub egg: u64,
    pub container: ServerContainer,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListApplicationServersParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[uuid]", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "filter[uuid_short]", skip_serializing_if = "Option::is_none")]
    pub uuid_short: Option<String>,
    #[serde(rename = "filter[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "filter[description]", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "filter[image]", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "filter[external_id]", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerLimitsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerFeatureLimitsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocations: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<Option<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllocationInput {
    pub default: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<u64>,
}

/// Let the panel pick a node and allocation instead of naming one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployInput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_ip: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub port_range: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateServerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user: u64,
    pub egg: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<String>,
    pub environment: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oom_killer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ServerLimitsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_limits: Option<ServerFeatureLimitsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_on_completion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<DeployInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateServerDetailsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateServerBuildParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oom_killer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ServerLimitsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_limits: Option<ServerFeatureLimitsInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_allocations: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_allocations: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateServerStartupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartTransferParams {
    pub node_id: u64,
    pub allocation_id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_allocations: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientServerSftpDetails {
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
}

/// A server as seen by the client API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientServer {
    pub server_owner: bool,
    pub identifier: String,
    pub internal_id: u64,
    pub uuid: Uuid,
    pub name: String,
    pub node: String,
    #[serde(default)]
    pub is_node_under_maintenance: bool,
    pub sftp_details: ClientServerSftpDetails,
    #[serde(default)]
    pub description: String,
    pub limits: ServerLimits,
    pub invocation: String,
    pub docker_image: String,
    pub egg_features: Option<Vec<String>>,
    pub feature_limits: ServerFeatureLimits,
    pub status: Option<ServerStatus>,
    #[serde(default)]
    pub is_transferring: bool,
}

/// A client server plus the caller's relationship to it, read from `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientServerWithMeta {
    pub server: ClientServer,
    pub is_server_owner: bool,
    pub user_permissions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientServerScope {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "admin-all")]
    AdminAll,
    #[serde(rename = "owner")]
    Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListClientServersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scope: Option<ClientServerScope>,
    #[serde(rename = "filter[uuid]", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "filter[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "filter[description]", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "filter[external_id]", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Matches any of the filterable fields.
    #[serde(rename = "filter[*]", skip_serializing_if = "Option::is_none")]
    pub any: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Stop,
    Restart,
    Kill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    Running,
    Stopped,
    Starting,
    Stopping,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServerResources {
    pub memory_bytes: u64,
    pub cpu_absolute: f64,
    pub disk_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    pub uptime: u64,
}

/// Live utilization snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    pub current_state: PowerState,
    pub is_suspended: bool,
    pub resources: ServerResources,
}

/// Short-lived credentials for the daemon's console websocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsocketToken {
    pub token: String,
    pub socket: String,
}
