//! # HTTP Gateway
//!
//! [`OrderGateway`] implementation over `reqwest`, speaking to two base
//! URLs: the restaurant catalog service and the order service. A configured
//! static credential is attached to every request as an `X-API-Key` header;
//! when no credential is configured the header is omitted entirely.

use crate::gateway::{GatewayError, OrderGateway};
use crate::model::{MenuItem, OrderRequest, OrderSummary, Restaurant};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Header carrying the static API credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

const DEFAULT_RESTAURANT_API: &str = "http://localhost:8082";
const DEFAULT_ORDER_API: &str = "http://localhost:8081";

/// Endpoints and credential for the remote services.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the restaurant catalog service.
    pub restaurant_base_url: String,
    /// Base URL of the order service.
    pub order_base_url: String,
    /// Optional static credential; `None` means the auth header is never sent.
    pub api_key: Option<String>,
}

impl GatewayConfig {
    /// Reads endpoints from `RESTAURANT_API` / `ORDER_API`, falling back to
    /// the local development defaults. No credential is configured here;
    /// callers wire one in from the credential store when present.
    pub fn from_env() -> Self {
        Self {
            restaurant_base_url: std::env::var("RESTAURANT_API")
                .unwrap_or_else(|_| DEFAULT_RESTAURANT_API.to_string()),
            order_base_url: std::env::var("ORDER_API")
                .unwrap_or_else(|_| DEFAULT_ORDER_API.to_string()),
            api_key: None,
        }
    }

    /// Points both services at the same base URL. Test servers expose all
    /// routes on a single listener.
    pub fn single_endpoint(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            restaurant_base_url: base.clone(),
            order_base_url: base,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// HTTP implementation of [`OrderGateway`].
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Builds the gateway with a fresh HTTP client.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.attach_credential(self.client.get(url))
    }

    fn attach_credential(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Sends the request and decodes the body as `T`.
    ///
    /// Non-2xx responses become [`GatewayError::RequestFailed`] carrying the
    /// body text; so do 2xx responses whose body is not the expected JSON
    /// shape (a non-JSON success body is a malformed response, not a
    /// success).
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "remote call failed");
            return Err(GatewayError::from_response(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| GatewayError::RequestFailed {
            status: status.as_u16(),
            message: format!("malformed response body: {e}"),
        })
    }
}

#[async_trait]
impl OrderGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, GatewayError> {
        let url = format!("{}/restaurants", self.config.restaurant_base_url);
        self.execute(self.get(url)).await
    }

    #[instrument(skip(self))]
    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, GatewayError> {
        let url = format!(
            "{}/restaurants/{restaurant_id}/menu",
            self.config.restaurant_base_url
        );
        self.execute(self.get(url)).await
    }

    #[instrument(skip(self, request), fields(restaurant_id = %request.restaurant_id))]
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderSummary, GatewayError> {
        let url = format!("{}/orders", self.config.order_base_url);
        let builder = self.attach_credential(self.client.post(url)).json(request);
        self.execute(builder).await
    }

    #[instrument(skip(self))]
    async fn fetch_order(&self, order_id: &str) -> Result<OrderSummary, GatewayError> {
        let url = format!("{}/orders/{order_id}", self.config.order_base_url);
        self.execute(self.get(url)).await
    }

    #[instrument(skip(self))]
    async fn list_orders(&self, limit: usize) -> Result<Vec<OrderSummary>, GatewayError> {
        let url = format!("{}/orders?limit={limit}", self.config.order_base_url);
        self.execute(self.get(url)).await
    }
}
