//! # Lifecycle & Wiring
//!
//! Builds a ready-to-use controller from configuration: endpoint config
//! from the environment, the stored API credential, the HTTP gateway, and
//! the controller on top. The presentation layer (or demo binary) only
//! deals with the finished [`OrderDesk`].

pub mod tracing;

pub use self::tracing::setup_tracing;

use crate::controller::OrderController;
use crate::credentials::CredentialStore;
use crate::gateway::{GatewayConfig, GatewayError, HttpGateway};
use ::tracing::info;
use std::path::PathBuf;

/// The assembled client application: one controller over one HTTP gateway.
pub struct OrderDesk {
    pub controller: OrderController<HttpGateway>,
    pub credentials: CredentialStore,
}

impl OrderDesk {
    /// Wires the client from environment configuration and the credential
    /// file at `credential_path`. A stored credential is attached to every
    /// request; no file means no auth header.
    pub fn from_env(credential_path: impl Into<PathBuf>) -> Result<Self, GatewayError> {
        let credentials = CredentialStore::new(credential_path);
        let mut config = GatewayConfig::from_env();
        if let Some(key) = credentials.load() {
            config = config.with_api_key(key);
        }
        Self::with_config(config, credentials)
    }

    /// Wires the client from an explicit configuration.
    pub fn with_config(
        config: GatewayConfig,
        credentials: CredentialStore,
    ) -> Result<Self, GatewayError> {
        info!(
            restaurant_api = %config.restaurant_base_url,
            order_api = %config.order_base_url,
            has_credential = config.api_key.is_some(),
            "wiring order client"
        );
        let gateway = HttpGateway::new(config)?;
        Ok(Self {
            controller: OrderController::new(gateway),
            credentials,
        })
    }

    /// Persists a new API credential.
    ///
    /// The running gateway keeps its current header; like the original UI,
    /// a changed key applies from the next wiring on.
    pub fn save_credential(&self, api_key: &str) -> std::io::Result<()> {
        self.credentials.save(api_key)
    }
}
