//! Root entry point tying the gateway to the two API groups.
//!
//! # Design
//! `PelicanClient` owns one `Gateway` and hands out `Application` and
//! `ClientApi` factories bound to it. The base URL is normalized once here
//! so every accessor can append absolute paths. Nothing is cached between
//! calls; the client is `Clone + Send + Sync` and clones share the transport.

use std::sync::Arc;

use crate::application::Application;
use crate::client_api::ClientApi;
use crate::gateway::Gateway;
use crate::transport::{Transport, UreqTransport};

#[derive(Debug, Clone)]
pub struct PelicanClient {
    gateway: Gateway,
}

impl PelicanClient {
    /// Client over the default blocking `ureq` transport.
    ///
    /// `base_url` is the panel root, e.g. `https://panel.example.com`; one
    /// trailing slash is stripped. `token` is sent as a bearer token and is
    /// not validated.
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::with_transport(base_url, token, UreqTransport::new())
    }

    pub fn with_transport(base_url: &str, token: &str, transport: impl Transport + 'static) -> Self {
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
        Self {
            gateway: Gateway::new(base_url, token, Arc::new(transport)),
        }
    }

    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }

    /// The underlying request path, for endpoints without a typed accessor.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Administrative API; needs an application API key.
    pub fn application(&self) -> Application {
        Application::new(self.gateway.clone())
    }

    /// User-facing API; needs a client API key.
    pub fn client(&self) -> ClientApi {
        ClientApi::new(self.gateway.clone())
    }
}
