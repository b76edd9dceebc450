//! Operations scoped to a single server.

mod backups;
mod databases;
mod files;
mod network;
mod schedules;
mod settings;
mod startup;
mod subusers;

pub use backups::Backups;
pub use databases::Databases;
pub use files::Files;
pub use network::Network;
pub use schedules::Schedules;
pub use settings::Settings;
pub use startup::Startup;
pub use subusers::Subusers;

use serde::Deserialize;
use serde_json::json;

use crate::envelope::{Page, Single};
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ActivityLog, ClientServer, ClientServerWithMeta, ListActivityParams, PowerSignal, ServerStats, WebsocketToken};

#[derive(Debug, Clone)]
pub struct ServerApi {
    gateway: Gateway,
    path: String,
}

#[derive(Deserialize)]
struct ServerEnvelope {
    attributes: ClientServer,
    meta: ServerMeta,
}

#[derive(Deserialize)]
struct ServerMeta {
    is_server_owner: bool,
    user_permissions: Vec<String>,
}

#[derive(Deserialize)]
struct WebsocketEnvelope {
    data: WebsocketToken,
}

impl ServerApi {
    pub(crate) fn new(gateway: Gateway, server: &str) -> Self {
        Self {
            gateway,
            path: format!("/api/client/servers/{server}"),
        }
    }

    /// The server plus whether the caller owns it and what they may do.
    pub fn get(&self, include: Option<&str>) -> Result<ClientServerWithMeta, Error> {
        let envelope: ServerEnvelope = self
            .gateway
            .json(RequestConfig::get(self.path.as_str()).include(include))?;
        Ok(ClientServerWithMeta {
            server: envelope.attributes,
            is_server_owner: envelope.meta.is_server_owner,
            user_permissions: envelope.meta.user_permissions,
        })
    }

    /// Credentials for the console websocket. The payload sits under a
    /// top-level `data` key rather than an entity envelope.
    pub fn websocket(&self) -> Result<WebsocketToken, Error> {
        let envelope: WebsocketEnvelope = self
            .gateway
            .json(RequestConfig::get(format!("{}/websocket", self.path)))?;
        Ok(envelope.data)
    }

    pub fn resources(&self) -> Result<ServerStats, Error> {
        self.gateway
            .json::<Single<ServerStats>>(RequestConfig::get(format!("{}/resources", self.path)))
            .map(|envelope| envelope.attributes)
    }

    pub fn list_activity(&self, params: &ListActivityParams) -> Result<Page<ActivityLog>, Error> {
        self.gateway
            .page(RequestConfig::get(format!("{}/activity", self.path)).query(params)?)
    }

    pub fn send_command(&self, command: &str) -> Result<(), Error> {
        self.gateway.empty(
            RequestConfig::post(format!("{}/command", self.path)).json(&json!({ "command": command }))?,
        )
    }

    pub fn send_power(&self, signal: PowerSignal) -> Result<(), Error> {
        self.gateway.empty(
            RequestConfig::post(format!("{}/power", self.path)).json(&json!({ "signal": signal }))?,
        )
    }

    pub fn files(&self) -> Files {
        Files::new(self.gateway.clone(), &self.path)
    }

    pub fn databases(&self) -> Databases {
        Databases::new(self.gateway.clone(), &self.path)
    }

    pub fn schedules(&self) -> Schedules {
        Schedules::new(self.gateway.clone(), &self.path)
    }

    pub fn network(&self) -> Network {
        Network::new(self.gateway.clone(), &self.path)
    }

    pub fn subusers(&self) -> Subusers {
        Subusers::new(self.gateway.clone(), &self.path)
    }

    pub fn backups(&self) -> Backups {
        Backups::new(self.gateway.clone(), &self.path)
    }

    pub fn startup(&self) -> Startup {
        Startup::new(self.gateway.clone(), &self.path)
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.gateway.clone(), &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{stub_gateway, StubTransport};
    use crate::types::PowerState;

    fn client_server_attributes() -> serde_json::Value {
        json!({
            "server_owner": true,
            "identifier": "1a7ce997",
            "internal_id": 12,
            "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
            "name": "lobby",
            "node": "node-1",
            "is_node_under_maintenance": false,
            "sftp_details": {"ip": "sftp.example.com", "alias": null, "port": 2022},
            "description": "",
            "limits": {"memory": 1024, "swap": 0, "disk": 5120, "io": 500, "cpu": 100, "threads": null, "oom_killer": false},
            "invocation": "java -jar server.jar",
            "docker_image": "ghcr.io/java:21",
            "egg_features": ["eula"],
            "feature_limits": {"databases": 1, "allocations": 1, "backups": 1},
            "status": null,
            "is_transferring": false
        })
    }

    #[test]
    fn get_merges_meta_fields() {
        let body = json!({
            "object": "server",
            "attributes": client_server_attributes(),
            "meta": {"is_server_owner": true, "user_permissions": ["*"]}
        });
        let (gateway, stub) = stub_gateway(StubTransport::json(200, body));

        let server = ServerApi::new(gateway, "1a7ce997").get(None).unwrap();

        assert_eq!(server.server.name, "lobby");
        assert!(server.is_server_owner);
        assert_eq!(server.user_permissions, vec!["*"]);
        assert_eq!(stub.last_request().url, "https://panel.example.com/api/client/servers/1a7ce997");
    }

    #[test]
    fn websocket_reads_top_level_data() {
        let body = json!({"data": {"token": "jwt", "socket": "wss://node.example.com/api/servers/1a7ce997/ws"}});
        let (gateway, _) = stub_gateway(StubTransport::json(200, body));

        let token = ServerApi::new(gateway, "1a7ce997").websocket().unwrap();

        assert_eq!(token.token, "jwt");
        assert!(token.socket.starts_with("wss://"));
    }

    #[test]
    fn resources_unwraps_stats() {
        let body = json!({
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {
                    "memory_bytes": 1048576, "cpu_absolute": 12.5, "disk_bytes": 2048,
                    "network_rx_bytes": 10, "network_tx_bytes": 20, "uptime": 3600
                }
            }
        });
        let (gateway, _) = stub_gateway(StubTransport::json(200, body));

        let stats = ServerApi::new(gateway, "1a7ce997").resources().unwrap();

        assert_eq!(stats.current_state, PowerState::Running);
        assert_eq!(stats.resources.cpu_absolute, 12.5);
    }

    #[test]
    fn send_power_serializes_signal() {
        let (gateway, stub) = stub_gateway(StubTransport::empty(204));
        ServerApi::new(gateway, "1a7ce997").send_power(PowerSignal::Restart).unwrap();
        assert_eq!(stub.last_json(), json!({"signal": "restart"}));
    }
}
