use serde::{Deserialize, Serialize};

/// A database attached to a server (application API).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDatabase {
    pub id: u64,
    pub server: u64,
    pub host: u64,
    pub database: String,
    pub username: String,
    pub remote: String,
    pub max_connections: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateServerDatabaseParams {
    pub database: String,
    /// Hosts allowed to connect, `%` for any.
    pub remote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDatabaseHost {
    pub address: String,
    pub port: u16,
}

/// A server database as seen by the client API.
///
/// `password` is only populated by create and rotate-password, where the
/// panel returns it once under `relationships.password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDatabase {
    pub id: String,
    pub host: ClientDatabaseHost,
    pub name: String,
    pub username: String,
    pub connections_from: String,
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateClientDatabaseParams {
    pub database: String,
    pub remote: String,
}
