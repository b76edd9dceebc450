use serde::{Deserialize, Serialize};

use super::ListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginState {
    NotInstalled,
    Installing,
    Installed,
    Enabled,
    Disabled,
    UpdateAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub id: u64,
    pub name: String,
    pub author: String,
    pub category: String,
    pub version: String,
    pub description: Option<String>,
    pub state: PluginState,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPluginsParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[id]", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "filter[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "filter[author]", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "filter[category]", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
