use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::ListParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggVariable {
    pub id: u64,
    pub egg_id: u64,
    pub name: String,
    pub description: String,
    pub env_variable: String,
    pub default_value: String,
    pub user_viewable: bool,
    pub user_editable: bool,
    pub rules: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggScript {
    pub privileged: bool,
    pub install: String,
    pub entry: String,
    pub container: String,
    pub extends: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggConfig {
    #[serde(default)]
    pub files: Map<String, Value>,
    #[serde(default)]
    pub startup: Map<String, Value>,
    pub stop: String,
    #[serde(default)]
    pub logs: Vec<Value>,
    #[serde(default)]
    pub file_denylist: Vec<String>,
    pub extends: Option<String>,
}

/// A server configuration template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Egg {
    pub id: u64,
    pub uuid: Uuid,
    pub name: String,
    pub author: String,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    /// Display name to image reference.
    #[serde(default)]
    pub docker_images: BTreeMap<String, String>,
    pub config: EggConfig,
    pub startup: String,
    pub script: EggScript,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListEggsParams {
    #[serde(flatten)]
    pub list: ListParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EggExportFormat {
    #[default]
    Yaml,
    Json,
}

impl EggExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            EggExportFormat::Yaml => "yaml",
            EggExportFormat::Json => "json",
        }
    }

    /// `Accept` header matching the export format.
    pub fn accept(self) -> &'static str {
        match self {
            EggExportFormat::Yaml => "application/x-yaml",
            EggExportFormat::Json => "application/json",
        }
    }
}

/// A startup variable as seen by the client API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEggVariable {
    pub name: String,
    pub description: String,
    pub env_variable: String,
    pub default_value: String,
    pub server_value: Option<String>,
    pub is_editable: bool,
    pub rules: String,
}

/// `meta` of the startup variable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggVariableCollectionMeta {
    pub startup_command: String,
    pub raw_startup_command: String,
    #[serde(default)]
    pub docker_images: BTreeMap<String, String>,
}

/// Startup variables together with the rendered startup command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupDetails {
    pub variables: Vec<ClientEggVariable>,
    pub startup_command: String,
    pub raw_startup_command: String,
    pub docker_images: BTreeMap<String, String>,
}

/// Result of updating one startup variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedStartupVariable {
    pub variable: ClientEggVariable,
    pub startup_command: String,
}
