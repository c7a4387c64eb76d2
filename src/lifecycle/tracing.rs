//! # Observability & Tracing
//!
//! Structured logging for the whole client, configured once at startup.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`)
//! to keep log lines short, and the level is driven by `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads at remote-call boundaries
//! RUST_LOG=debug cargo run
//!
//! # Filter to the gateway only
//! RUST_LOG=saga_order_client::gateway=debug cargo run
//! ```
//!
//! Controller and gateway operations carry `#[instrument]` spans, so a
//! submission shows up as `submit_order:create_order:` with the order id
//! and restaurant id as structured fields.

/// Initializes the tracing subscriber. Call once, before any operation.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
