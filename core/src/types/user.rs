use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ListParams;

/// A panel user as seen by the application API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationUser {
    pub id: u64,
    pub external_id: Option<String>,
    #[serde(default)]
    pub is_managed_externally: bool,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub language: String,
    pub root_admin: bool,
    #[serde(rename = "2fa_enabled")]
    pub two_factor_enabled: bool,
    #[serde(rename = "2fa", default)]
    pub two_factor: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListUsersParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(rename = "filter[email]", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "filter[uuid]", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(rename = "filter[username]", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "filter[external_id]", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed_externally: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_managed_externally: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignRolesParams {
    pub roles: Vec<u64>,
}

/// The authenticated user as seen by the client API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientUser {
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub language: String,
    pub root_admin: bool,
    #[serde(rename = "2fa_enabled")]
    pub two_factor_enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}
