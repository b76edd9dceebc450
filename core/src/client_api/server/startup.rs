use serde::Deserialize;
use serde_json::json;

use crate::envelope::Item;
use crate::error::Error;
use crate::gateway::Gateway;
use crate::request::RequestConfig;
use crate::types::{ClientEggVariable, EggVariableCollectionMeta, StartupDetails, UpdatedStartupVariable};

/// Startup variables and the command they render into.
#[derive(Debug, Clone)]
pub struct Startup {
    gateway: Gateway,
    path: String,
}

#[derive(Deserialize)]
struct VariableList {
    data: Vec<Item<ClientEggVariable>>,
    meta: EggVariableCollectionMeta,
}

#[derive(Deserialize)]
struct VariableUpdate {
    attributes: ClientEggVariable,
    meta: StartupCommandMeta,
}

#[derive(Deserialize)]
struct StartupCommandMeta {
    startup_command: String,
}

impl Startup {
    pub(crate) fn new(gateway: Gateway, server_path: &str) -> Self {
        Self {
            gateway,
            path: format!("{server_path}/startup"),
        }
    }

    pub fn list(&self) -> Result<StartupDetails, Error> {
        let list: VariableList = self.gateway.json(RequestConfig::get(self.path.as_str()))?;
        Ok(StartupDetails {
            variables: list.data.into_iter().map(|item| item.attributes).collect(),
            startup_command: list.meta.startup_command,
            raw_startup_command: list.meta.raw_startup_command,
            docker_images: list.meta.docker_images,
        })
    }

    pub fn update_variable(&self, key: &str, value: &str) -> Result<UpdatedStartupVariable, Error> {
        let config = RequestConfig::put(format!("{}/variable", self.path)).json(&json!({ "key": key, "value": value }))?;
        let update: VariableUpdate = self.gateway.json(config)?;
        Ok(UpdatedStartupVariable {
            variable: update.attributes,
            startup_command: update.meta.startup_command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{stub_gateway, StubTransport};

    const SERVER: &str = "/api/client/servers/1a7ce997";

    fn variable(value: &str) -> serde_json::Value {
        json!({
            "name": "Server Jar File", "description": "The jar to run", "env_variable": "SERVER_JARFILE",
            "default_value": "server.jar", "server_value": value, "is_editable": true, "rules": "required|string"
        })
    }

    #[test]
    fn list_merges_variables_with_meta() {
        let body = json!({
            "object": "list",
            "data": [{"object": "egg_variable", "attributes": variable("server.jar")}],
            "meta": {
                "startup_command": "java -jar server.jar",
                "raw_startup_command": "java -jar {{SERVER_JARFILE}}",
                "docker_images": {"Java 21": "ghcr.io/java:21"}
            }
        });
        let (gateway, _) = stub_gateway(StubTransport::json(200, body));

        let details = Startup::new(gateway, SERVER).list().unwrap();

        assert_eq!(details.variables[0].env_variable, "SERVER_JARFILE");
        assert_eq!(details.raw_startup_command, "java -jar {{SERVER_JARFILE}}");
        assert_eq!(details.docker_images["Java 21"], "ghcr.io/java:21");
    }

    #[test]
    fn update_variable_reads_rendered_command() {
        let body = json!({
            "object": "egg_variable",
            "attributes": variable("paper.jar"),
            "meta": {"startup_command": "java -jar paper.jar"}
        });
        let (gateway, stub) = stub_gateway(StubTransport::json(200, body));

        let updated = Startup::new(gateway, SERVER).update_variable("SERVER_JARFILE", "paper.jar").unwrap();

        assert_eq!(updated.variable.server_value.as_deref(), Some("paper.jar"));
        assert_eq!(updated.startup_command, "java -jar paper.jar");
        assert_eq!(stub.last_request().method, HttpMethod::Put);
        assert_eq!(stub.last_json(), json!({"key": "SERVER_JARFILE", "value": "paper.jar"}));
    }
}
