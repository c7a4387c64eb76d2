//! Order service wire types.
//!
//! `OrderSummary` is whatever the order service last said about an order.
//! The client treats it as a snapshot: each refresh replaces the whole
//! record, and the `status` string is passed through untouched so new
//! server-side states never break the client.

use serde::{Deserialize, Serialize};

/// Request-level flag asking the backend to deliberately fail one saga
/// step, used for exercising compensation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    PaymentFailure,
    RestaurantFailure,
}

/// One cart line as sent to the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    pub quantity: u32,
}

/// Body of `POST /orders`.
///
/// `order_id` is generated client-side before the request goes out, so the
/// same identifier can be used for idempotent resubmission and for status
/// lookup even when the create call itself fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub restaurant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    pub items: Vec<OrderItemInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_mode: Option<SimulationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// One resolved line item inside an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub menu_item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_total: Option<f64>,
}

/// Server-side view of an order, as returned by create/get/list.
///
/// Expected `status` values include `PENDING`, `CONFIRMED`, `COMPLETED`,
/// `FAILED` and `COMPENSATED`, but the enumeration is owned by the server
/// and deliberately not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Equal to the client-generated identifier when the create succeeded.
    pub id: String,
    pub restaurant_id: String,
    pub status: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub items: Option<Vec<OrderLineItem>>,
    #[serde(default)]
    pub payment_reference: Option<String>,
    /// Populated when a saga step failed and the order was compensated.
    #[serde(default)]
    pub failure_reason: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
