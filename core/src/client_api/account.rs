use serde::Deserialize;

use crate::envelope::Page;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{
    ActivityLog, ApiKey, ApiKeyWithSecret, ClientUser, CreateApiKeyParams, CreateSshKeyParams, ListActivityParams, SshKey,
    UpdateEmailParams, UpdatePasswordParams, UpdateUsernameParams,
};

const ACCOUNT: &str = "/api/client/account";

/// The authenticated user's own account.
#[derive(Debug, Clone)]
pub struct Account {
    gateway: Gateway,
}

impl Account {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn get(&self) -> Result<ClientUser, Error> {
        self.gateway.single(RequestConfig::get(ACCOUNT))
    }

    pub fn update_username(&self, params: &UpdateUsernameParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::put(format!("{ACCOUNT}/username")).json(params)?)
    }

    pub fn update_email(&self, params: &UpdateEmailParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::put(format!("{ACCOUNT}/email")).json(params)?)
    }

    /// Changing the password signs out every other session.
    pub fn update_password(&self, params: &UpdatePasswordParams) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::put(format!("{ACCOUNT}/password")).json(params)?)
    }

    pub fn list_activity(&self, params: &ListActivityParams) -> Result<Page<ActivityLog>, Error> {
        self.gateway
            .page(RequestConfig::get(format!("{ACCOUNT}/activity")).query(params)?)
    }

    pub fn api_keys(&self) -> ApiKeys {
        ApiKeys {
            gateway: self.gateway.clone(),
        }
    }

    pub fn ssh_keys(&self) -> SshKeys {
        SshKeys {
            gateway: self.gateway.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeys {
    gateway: Gateway,
}

// The secret is only ever sent once, in `meta` next to the new key.
#[derive(Deserialize)]
struct CreatedApiKey {
    attributes: ApiKey,
    meta: SecretMeta,
}

#[derive(Deserialize)]
struct SecretMeta {
    secret_token: String,
}

impl ApiKeys {
    pub fn list(&self) -> Result<Vec<ApiKey>, Error> {
        self.gateway.list(RequestConfig::get(format!("{ACCOUNT}/api-keys")))
    }

    pub fn create(&self, params: &CreateApiKeyParams) -> Result<ApiKeyWithSecret, Error> {
        let created: CreatedApiKey = self
            .gateway
            .json(RequestConfig::post(format!("{ACCOUNT}/api-keys")).json(params)?)?;
        Ok(ApiKeyWithSecret {
            key: created.attributes,
            secret_token: created.meta.secret_token,
        })
    }

    pub fn delete(&self, identifier: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{ACCOUNT}/api-keys/{identifier}")))
    }
}

#[derive(Debug, Clone)]
pub struct SshKeys {
    gateway: Gateway,
}

impl SshKeys {
    pub fn list(&self) -> Result<Vec<SshKey>, Error> {
        self.gateway.list(RequestConfig::get(format!("{ACCOUNT}/ssh-keys")))
    }

    pub fn create(&self, params: &CreateSshKeyParams) -> Result<SshKey, Error> {
        self.gateway
            .single(RequestConfig::post(format!("{ACCOUNT}/ssh-keys")).json(params)?)
    }

    pub fn delete(&self, fingerprint: &str) -> Result<(), Error> {
        self.gateway
            .empty(RequestConfig::delete(format!("{ACCOUNT}/ssh-keys/{fingerprint}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{pairs, paginated, sorted_query, stub_gateway, StubTransport};
    use crate::types::ActivitySort;
    use serde_json::json;

    #[test]
    fn create_api_key_merges_secret_from_meta() {
        let body = json!({
            "object": "api_key",
            "attributes": {
                "identifier": "pacc_1a2b3c",
                "description": "ci",
                "allowed_ips": [],
                "last_used_at": null,
                "created_at": "2024-01-01T00:00:00+00:00"
            },
            "meta": {"secret_token": "s3cr3t"}
        });
        let (gateway, stub) = stub_gateway(StubTransport::json(201, body));
        let params = CreateApiKeyParams {
            description: "ci".to_string(),
            allowed_ips: None,
        };

        let key = Account::new(gateway).api_keys().create(&params).unwrap();

        assert_eq!(key.key.identifier, "pacc_1a2b3c");
        assert_eq!(key.secret_token, "s3cr3t");
        assert_eq!(stub.last_json(), json!({"description": "ci"}));
    }

    #[test]
    fn create_api_key_without_secret_is_a_decode_error() {
        let body = json!({
            "object": "api_key",
            "attributes": {
                "identifier": "pacc_1a2b3c", "description": "ci", "allowed_ips": [],
                "last_used_at": null, "created_at": "2024-01-01T00:00:00+00:00"
            }
        });
        let (gateway, _) = stub_gateway(StubTransport::json(201, body));
        let params = CreateApiKeyParams {
            description: "ci".to_string(),
            allowed_ips: None,
        };

        let err = Account::new(gateway).api_keys().create(&params).unwrap_err();

        assert!(matches!(err, Error::Decode { status: 201, .. }));
    }

    #[test]
    fn update_email_is_a_put() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        let params = UpdateEmailParams {
            email: "new@example.com".to_string(),
            password: "hunter2".to_string(),
        };

        Account::new(gateway).update_email(&params).unwrap();

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://panel.example.com/api/client/account/email");
    }

    #[test]
    fn list_activity_sorts_newest_first() {
        let (gateway, stub) = stub_gateway(StubTransport::json(200, paginated("activity_log", vec![])));
        let params = ListActivityParams {
            event: Some("auth:success".to_string()),
            sort: Some(ActivitySort::Newest),
            ..Default::default()
        };

        Account::new(gateway).list_activity(&params).unwrap();

        assert_eq!(
            sorted_query(&stub.last_request()),
            pairs(&[("filter[event]", "auth:success"), ("sort", "-timestamp")])
        );
    }

    #[test]
    fn ssh_key_delete_uses_fingerprint() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        Account::new(gateway).ssh_keys().delete("SHA256:abc").unwrap();
        assert_eq!(
            stub.last_request().url,
            "https://panel.example.com/api/client/account/ssh-keys/SHA256:abc"
        );
    }
}
