//! Scripted demo flow for the saga order client.
//!
//! Mirrors what the UI does: load restaurants (fallback-aware), pick one,
//! put a couple of items in the cart, submit the order, then check its
//! saga status and the recent-orders overview.

use saga_order_client::controller::DEFAULT_OVERVIEW_LIMIT;
use saga_order_client::lifecycle::{setup_tracing, OrderDesk};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order client demo");

    let mut desk =
        OrderDesk::from_env(".saga-order-client/api-key").map_err(|e| e.to_string())?;
    let controller = &mut desk.controller;

    // Browse: restaurant list with fallback, then the first menu
    let span = tracing::info_span!("browse");
    async {
        controller.load_restaurants().await;
        if let Some(notice) = controller.notice() {
            warn!(notice, "running against demo data");
        }

        let restaurant_id = controller
            .restaurants()
            .first()
            .map(|r| r.id.clone())
            .ok_or_else(|| "no restaurants available".to_string())?;
        controller.select_restaurant(&restaurant_id).await;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Fill the cart: two of the first item, one of the second
    let item_ids: Vec<String> = controller.menu().iter().map(|i| i.id.clone()).collect();
    if let Some(first) = item_ids.first() {
        controller.add_item(first);
        controller.add_item(first);
    }
    if let Some(second) = item_ids.get(1) {
        controller.add_item(second);
    }

    let totals = controller.cart_totals();
    info!(
        lines = totals.lines.len(),
        total = totals.grand_total,
        "cart assembled"
    );

    // Submit and monitor
    let span = tracing::info_span!("order_processing");
    async {
        match controller.submit_order(Some("demo walkthrough"), None).await {
            Ok(()) => {
                if let Some(order) = controller.active_order() {
                    info!(order_id = %order.id, status = %order.status, "order submitted");
                }
            }
            Err(e) => warn!(error = %e, "submission failed"),
        }

        let lookup_id = controller.status_lookup_id().to_string();
        if !lookup_id.is_empty() {
            let _ = controller.refresh_status(&lookup_id).await;
        }
        let _ = controller.refresh_overview(DEFAULT_OVERVIEW_LIMIT).await;
    }
    .instrument(span)
    .await;

    if let Some(order) = controller.active_order() {
        info!(
            order_id = %order.id,
            status = %order.status,
            failure_reason = order.failure_reason.as_deref().unwrap_or("-"),
            "final order state"
        );
    }
    info!(
        recent_orders = controller.overview().len(),
        "demo flow complete"
    );
    Ok(())
}
