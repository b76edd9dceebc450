use serde::{Deserialize, Serialize};

use super::ListParams;

/// A node port allocation (application API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: u64,
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    pub assigned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAllocationsParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[ip]", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(rename = "filter[port]", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "filter[ip_alias]", skip_serializing_if = "Option::is_none")]
    pub ip_alias: Option<String>,
    #[serde(rename = "filter[server_id]", skip_serializing_if = "Option::is_none")]
    pub server_id: Option<u64>,
}

/// `ports` entries are single ports or ranges such as `"25565-25570"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAllocationsParams {
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub ports: Vec<String>,
}

/// A server's allocation as seen by the client API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAllocation {
    pub id: u64,
    pub ip: String,
    pub ip_alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    pub is_default: bool,
}
