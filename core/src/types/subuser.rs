use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user granted access to someone else's server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subuser {
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "2fa_enabled", default)]
    pub two_factor_enabled: bool,
    pub created_at: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSubuserParams {
    pub email: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSubuserParams {
    pub permissions: Vec<String>,
}
