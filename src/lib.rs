//! # Saga Order Client
//!
//! A client for a food-ordering demo system: browse restaurant menus,
//! assemble a cart, submit an order to a remote order service, and monitor
//! its asynchronous saga status (including compensation failures) until it
//! settles. The backends (restaurant catalog, order orchestration, payment)
//! are external collaborators reached only over HTTP/JSON.
//!
//! ## Module Tour
//!
//! - **[`gateway`]** -- thin typed wrapper over the remote services. One
//!   trait method per capability, every failure normalized into
//!   [`GatewayError`](gateway::GatewayError). A scripted
//!   [`MockGateway`](gateway::mock::MockGateway) sits beside the HTTP
//!   implementation for tests.
//! - **[`cart`]** -- quantity map scoped to the selected restaurant, with
//!   totals derived by a pure join against the menu.
//! - **[`controller`]** -- the order lifecycle: submission with a
//!   client-generated idempotent identifier, status and overview refresh,
//!   typed displayable error state. This is the only layer with nontrivial
//!   state transitions.
//! - **[`fallback`]** -- pure substitution policy supplying demo data when
//!   read calls fail or come back empty.
//! - **[`model`]** -- serde wire types shared by all of the above.
//! - **[`credentials`]** -- the persisted API key.
//! - **[`lifecycle`]** -- tracing setup and application wiring.
//!
//! ## Design Notes
//!
//! The order identifier is generated *before* the create call and rides
//! along in the request, so it works as the join key across success and
//! failure branches: a failed submission still names the order the backend
//! may have partially created, and resubmission with the same id is
//! idempotent on the server side.
//!
//! Remote failures never propagate raw into a renderer. The controller
//! converts every one into typed error state; the worst outcome is a stale
//! panel with a visible message.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the scripted demo flow against local services
//! RUST_LOG=info cargo run
//!
//! # Point at other endpoints
//! RESTAURANT_API=http://10.0.0.5:8082 ORDER_API=http://10.0.0.5:8081 cargo run
//! ```

pub mod cart;
pub mod controller;
pub mod credentials;
pub mod fallback;
pub mod gateway;
pub mod lifecycle;
pub mod model;
