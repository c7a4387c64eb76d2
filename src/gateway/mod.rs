//! # Remote Gateway
//!
//! Thin typed wrapper over the restaurant catalog and order services.
//! One trait method per remote capability; every implementation normalizes
//! non-2xx responses and malformed success bodies into [`GatewayError`].
//!
//! Retry policy deliberately does **not** live here: the controller owns
//! failure handling and the order service owns idempotency.
//!
//! [`MockGateway`](mock::MockGateway) provides a scripted implementation
//! for testing controller logic without a server.

pub mod error;
pub mod http;
pub mod mock;

pub use error::GatewayError;
pub use http::{GatewayConfig, HttpGateway};

use crate::model::{MenuItem, OrderRequest, OrderSummary, Restaurant};
use async_trait::async_trait;

/// Typed access to the remote restaurant and order services.
///
/// Implementations must not retry; a single failure maps to a single
/// [`GatewayError`].
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// `GET /restaurants`
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, GatewayError>;

    /// `GET /restaurants/{id}/menu`
    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, GatewayError>;

    /// `POST /orders`
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderSummary, GatewayError>;

    /// `GET /orders/{id}`
    async fn fetch_order(&self, order_id: &str) -> Result<OrderSummary, GatewayError>;

    /// `GET /orders?limit=N`
    async fn list_orders(&self, limit: usize) -> Result<Vec<OrderSummary>, GatewayError>;
}
