//! Restaurant catalog types.
//!
//! Both types are immutable per fetch: the controller replaces them
//! wholesale whenever the selection changes, it never patches them.

use serde::{Deserialize, Serialize};

/// A restaurant as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Status label reported by the catalog (e.g. `ONLINE`). Opaque to the client.
    pub status: String,
}

/// A single entry of a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique within one restaurant's menu.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative; currency-exact to 2 fraction digits once rounded.
    pub price: f64,
    pub available: bool,
}
