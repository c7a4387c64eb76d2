//! # Order Lifecycle Controller
//!
//! Orchestrates the client-side order lifecycle: restaurant/menu loading
//! with fallback substitution, cart mutation, order submission with a
//! pre-generated idempotent identifier, and status/overview monitoring.
//!
//! The controller owns all mutable client state and is the only place that
//! talks to the gateway. Remote failures never escape as raw errors to the
//! presentation layer: each one is converted into a typed
//! [`ControllerError`] slot that a renderer can display.
//!
//! Concurrency model: single-threaded cooperative. Methods take `&mut self`
//! and suspend only at the network boundary, so cart mutations are atomic
//! with respect to the event loop and no locking is needed.

pub mod error;

pub use error::ControllerError;

use crate::cart::{CartStore, CartTotals};
use crate::fallback;
use crate::gateway::OrderGateway;
use crate::model::{
    MenuItem, OrderItemInput, OrderRequest, OrderSummary, Restaurant, SimulationMode,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Cap for the recent-orders overview list.
pub const DEFAULT_OVERVIEW_LIMIT: usize = 50;

/// Client-side view of the active order's submission progress.
///
/// After `Confirmed` / `SubmissionFailed`, explicit refreshes pass the
/// server-reported status string through [`OrderSummary::status`] untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Confirmed,
    SubmissionFailed,
}

/// Generates the client-side order identifier ahead of the network call,
/// so it is known even if submission fails outright.
fn generate_order_id() -> String {
    Uuid::new_v4().to_string()
}

/// Stateful controller driving the order lifecycle against a gateway.
pub struct OrderController<G: OrderGateway> {
    gateway: G,

    restaurants: Vec<Restaurant>,
    selected_restaurant: Option<String>,
    menu: Vec<MenuItem>,
    cart: CartStore,

    phase: SubmissionPhase,
    active_order: Option<OrderSummary>,
    /// Identifier prefilled for the next status lookup (last submitted or
    /// last explicitly refreshed order).
    status_lookup_id: String,
    overview: Vec<OrderSummary>,

    submission_error: Option<ControllerError>,
    status_error: Option<ControllerError>,
    overview_error: Option<ControllerError>,
    /// Set when read calls fell back to demo data.
    notice: Option<String>,
}

impl<G: OrderGateway> OrderController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            restaurants: Vec::new(),
            selected_restaurant: None,
            menu: Vec::new(),
            cart: CartStore::new(),
            phase: SubmissionPhase::Idle,
            active_order: None,
            status_lookup_id: String::new(),
            overview: Vec::new(),
            submission_error: None,
            status_error: None,
            overview_error: None,
            notice: None,
        }
    }

    // ------------------------------------------------------------------
    // Read-only state for the presentation layer
    // ------------------------------------------------------------------

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn selected_restaurant(&self) -> Option<&str> {
        self.selected_restaurant.as_deref()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Resolved cart lines and grand total against the loaded menu.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(&self.menu)
    }

    pub fn cart_quantity(&self, item_id: &str) -> u32 {
        self.cart.quantity(item_id)
    }

    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Last known summary of the actively tracked order.
    pub fn active_order(&self) -> Option<&OrderSummary> {
        self.active_order.as_ref()
    }

    pub fn status_lookup_id(&self) -> &str {
        &self.status_lookup_id
    }

    /// Recent orders, most recently updated first; bounded by the limit
    /// passed to [`refresh_overview`](Self::refresh_overview).
    pub fn overview(&self) -> &[OrderSummary] {
        &self.overview
    }

    pub fn submission_error(&self) -> Option<&ControllerError> {
        self.submission_error.as_ref()
    }

    pub fn status_error(&self) -> Option<&ControllerError> {
        self.status_error.as_ref()
    }

    pub fn overview_error(&self) -> Option<&ControllerError> {
        self.overview_error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // ------------------------------------------------------------------
    // Restaurant & menu loading (fallback-aware read path)
    // ------------------------------------------------------------------

    /// Loads the restaurant list, substituting the built-in demo
    /// restaurants when the call fails or returns an empty list.
    #[instrument(skip(self))]
    pub async fn load_restaurants(&mut self) {
        let outcome = self.gateway.list_restaurants().await;
        if let Err(e) = &outcome {
            warn!(error = %e, "restaurant list unavailable, falling back to demo data");
            self.notice = Some("Backend unreachable – using demo data.".to_string());
        }
        self.restaurants = fallback::resolve_restaurants(outcome);
        info!(count = self.restaurants.len(), "restaurant list loaded");
    }

    /// Selects a restaurant and loads its menu.
    ///
    /// The cart is always cleared: its keys are only valid against the menu
    /// they were added from. Passing an empty id clears the selection.
    #[instrument(skip(self))]
    pub async fn select_restaurant(&mut self, restaurant_id: &str) {
        self.cart.clear();
        if restaurant_id.is_empty() {
            self.selected_restaurant = None;
            self.menu.clear();
            return;
        }
        self.selected_restaurant = Some(restaurant_id.to_string());

        let outcome = self.gateway.fetch_menu(restaurant_id).await;
        if let Err(e) = &outcome {
            warn!(error = %e, restaurant_id, "menu unavailable, falling back to demo data");
            self.notice = Some("Could not load menu – showing demo selection.".to_string());
        }
        self.menu = fallback::resolve_menu(outcome, restaurant_id);
        info!(restaurant_id, items = self.menu.len(), "menu loaded");
    }

    // ------------------------------------------------------------------
    // Cart mutation
    // ------------------------------------------------------------------

    /// Adds one unit of `item_id` to the cart. Ignored unless the id is an
    /// available item of the loaded menu.
    pub fn add_item(&mut self, item_id: &str) {
        let known = self
            .menu
            .iter()
            .any(|item| item.id == item_id && item.available);
        if !known {
            debug!(item_id, "ignoring add for unknown or unavailable item");
            return;
        }
        self.cart.add_item(item_id);
    }

    /// Removes one unit of `item_id` from the cart; absent ids are a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
    }

    // ------------------------------------------------------------------
    // Order lifecycle
    // ------------------------------------------------------------------

    /// Submits the cart as an order.
    ///
    /// A no-op (no network call) unless a restaurant is selected and the
    /// cart resolves to at least one line. The order identifier is
    /// generated before the create call, embedded in the request for
    /// idempotent resubmission, and used as the join key across the
    /// success and failure branches.
    ///
    /// On failure the recorded [`ControllerError::SubmissionFailed`]
    /// message carries the generated id, and one best-effort status lookup
    /// plus overview refresh is attempted with it; secondary failures are
    /// swallowed without masking the original error.
    #[instrument(skip(self, customer_reference))]
    pub async fn submit_order(
        &mut self,
        customer_reference: Option<&str>,
        simulation: Option<SimulationMode>,
    ) -> Result<(), ControllerError> {
        let Some(restaurant_id) = self.selected_restaurant.clone() else {
            debug!("submit ignored: no restaurant selected");
            return Ok(());
        };
        let totals = self.cart.totals(&self.menu);
        if totals.is_empty() {
            debug!("submit ignored: cart is empty");
            return Ok(());
        }

        self.phase = SubmissionPhase::Submitting;
        self.submission_error = None;

        let order_id = generate_order_id();
        let request = OrderRequest {
            restaurant_id,
            customer_reference: customer_reference
                .filter(|r| !r.is_empty())
                .map(ToString::to_string),
            items: totals
                .lines
                .iter()
                .map(|line| OrderItemInput {
                    menu_item_id: line.item.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            simulation_mode: simulation,
            order_id: Some(order_id.clone()),
        };

        info!(%order_id, "submitting order");
        match self.gateway.create_order(&request).await {
            Ok(summary) => {
                info!(order_id = %summary.id, status = %summary.status, "order confirmed");
                self.status_lookup_id = summary.id.clone();
                self.active_order = Some(summary);
                self.cart.clear();
                self.phase = SubmissionPhase::Confirmed;
                // Monitoring is best-effort; a stale overview is fine here.
                let _ = self.refresh_overview(DEFAULT_OVERVIEW_LIMIT).await;
                Ok(())
            }
            Err(e) => {
                warn!(%order_id, error = %e, "order submission failed");
                let error = ControllerError::SubmissionFailed {
                    message: format!("{e} – order id {order_id}"),
                    order_id: order_id.clone(),
                };
                self.phase = SubmissionPhase::SubmissionFailed;
                self.submission_error = Some(error.clone());
                // The backend may have partially created the order before
                // compensating; one lookup with the generated id (which
                // also refreshes the overview) keeps it inspectable.
                let _ = self.refresh_status(&order_id).await;
                Err(error)
            }
        }
    }

    /// Fetches a single order by id, replacing the active summary wholesale
    /// on success. A blank id is a no-op: no network call, no state change.
    ///
    /// On failure the previous summary stays displayed and a
    /// [`ControllerError::StatusRefreshFailed`] is recorded. Either way the
    /// overview is refreshed afterwards, best-effort.
    #[instrument(skip(self))]
    pub async fn refresh_status(&mut self, order_id: &str) -> Result<(), ControllerError> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Ok(());
        }

        self.status_error = None;
        self.status_lookup_id = order_id.to_string();

        let result = match self.gateway.fetch_order(order_id).await {
            Ok(summary) => {
                debug!(order_id, status = %summary.status, "order status refreshed");
                self.active_order = Some(summary);
                Ok(())
            }
            Err(e) => {
                warn!(order_id, error = %e, "status refresh failed");
                let error = ControllerError::StatusRefreshFailed {
                    message: e.to_string(),
                };
                self.status_error = Some(error.clone());
                Err(error)
            }
        };

        let _ = self.refresh_overview(DEFAULT_OVERVIEW_LIMIT).await;
        result
    }

    /// Fetches the bounded recent-orders list.
    ///
    /// The stored list is replaced wholesale on success; on failure it is
    /// left intact (stale-but-available beats empty) and a
    /// [`ControllerError::OverviewRefreshFailed`] is recorded.
    #[instrument(skip(self))]
    pub async fn refresh_overview(&mut self, limit: usize) -> Result<(), ControllerError> {
        self.overview_error = None;
        match self.gateway.list_orders(limit).await {
            Ok(orders) => {
                debug!(count = orders.len(), "overview refreshed");
                self.overview = orders;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "overview refresh failed");
                let error = ControllerError::OverviewRefreshFailed {
                    message: e.to_string(),
                };
                self.overview_error = Some(error.clone());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let a = generate_order_id();
        let b = generate_order_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
