use serde::Deserialize;

use crate::envelope::Item;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ClientDatabase, CreateClientDatabaseParams};

#[derive(Debug, Clone)]
pub struct Databases {
    gateway: Gateway,
    path: String,
}

// Create and rotate-password return the new password as an included
// relationship, either beside `attributes` or nested inside it.
#[derive(Deserialize)]
struct DatabaseWithPassword {
    attributes: DatabaseAttributes,
    #[serde(default)]
    relationships: Option<PasswordRelationship>,
}

#[derive(Deserialize)]
struct DatabaseAttributes {
    #[serde(flatten)]
    database: ClientDatabase,
    #[serde(default)]
    relationships: Option<PasswordRelationship>,
}

#[derive(Deserialize)]
struct PasswordRelationship {
    #[serde(default)]
    password: Option<Item<Password>>,
}

#[derive(Deserialize)]
struct Password {
    password: String,
}

impl DatabaseWithPassword {
    fn into_database(self) -> ClientDatabase {
        let password = self
            .relationships
            .or(self.attributes.relationships)
            .and_then(|relationships| relationships.password)
            .map(|item| item.attributes.password);
        let mut database = self.attributes.database;
        if password.is_some() {
            database.password = password;
        }
        database
    }
}

impl Databases {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/databases"),
        }
    }

    pub fn list(&self, include: Option<&str>) -> Result<Vec<ClientDatabase>, Error> {
        self.gateway.list(RequestConfig::get(self.path.as_str()).include(include))
    }

    /// The returned database carries its password.
    pub fn create(&self, params: &CreateClientDatabaseParams) -> Result<ClientDatabase, Error> {
        self.gateway
            .json::<DatabaseWithPassword>(RequestConfig::post(self.path.as_str()).json(params)?)
            .map(DatabaseWithPassword::into_database)
    }

    pub fn rotate_password(&self, database_id: &str) -> Result<ClientDatabase, Error> {
        self.gateway
            .json::<DatabaseWithPassword>(RequestConfig::post(format!(
                "{}/{database_id}/rotate-password",
                self.path
            )))
            .map(DatabaseWithPassword::into_database)
    }

    pub fn delete(&self, database_id: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{}/{database_id}", self.path)))
    }
}
