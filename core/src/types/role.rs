use serde::{Deserialize, Serialize};

use super::ListParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListRolesParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[id]", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "filter[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRoleParams {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRoleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
