//! Full end-to-end flows: controller over the real HTTP gateway against a
//! mock server, covering the happy path and a saga compensation.

use httpmock::prelude::*;
use regex::Regex;
use saga_order_client::controller::{OrderController, SubmissionPhase, DEFAULT_OVERVIEW_LIMIT};
use saga_order_client::gateway::{GatewayConfig, HttpGateway};
use serde_json::json;

fn controller_for(server: &MockServer) -> OrderController<HttpGateway> {
    let gateway = HttpGateway::new(GatewayConfig::single_endpoint(server.base_url())).unwrap();
    OrderController::new(gateway)
}

#[tokio::test]
async fn full_order_flow_happy_path() {
    let server = MockServer::start();

    let _restaurants = server.mock(|when, then| {
        when.method(Method::GET).path("/restaurants");
        then.status(200).json_body(json!([
            {"id": "resto-roma", "name": "La Trattoria Roma", "status": "ONLINE"},
        ]));
    });
    let _menu = server.mock(|when, then| {
        when.method(Method::GET).path("/restaurants/resto-roma/menu");
        then.status(200).json_body(json!([
            {"id": "roma-carbonara", "name": "Pasta Carbonara", "price": 12.5, "available": true},
            {"id": "roma-margherita", "name": "Pizza Margherita", "price": 10.0, "available": true},
        ]));
    });
    let create = server.mock(|when, then| {
        when.method(Method::POST).path("/orders");
        then.status(201).json_body(json!({
            "id": "order-e2e",
            "restaurant_id": "resto-roma",
            "status": "PENDING",
            "total_amount": 35.0,
            "items": [
                {"menu_item_id": "roma-carbonara", "name": "Pasta Carbonara",
                 "quantity": 2, "unit_price": 12.5, "line_total": 25.0},
                {"menu_item_id": "roma-margherita", "name": "Pizza Margherita",
                 "quantity": 1, "unit_price": 10.0, "line_total": 10.0},
            ],
            "payment_reference": null,
            "failure_reason": null,
            "created_at": "2026-01-01T10:00:00Z",
            "updated_at": "2026-01-01T10:00:00Z",
        }));
    });
    let _status = server.mock(|when, then| {
        when.method(Method::GET).path("/orders/order-e2e");
        then.status(200).json_body(json!({
            "id": "order-e2e",
            "restaurant_id": "resto-roma",
            "status": "COMPLETED",
            "total_amount": 35.0,
            "items": null,
            "payment_reference": "pay-123",
            "failure_reason": null,
            "created_at": "2026-01-01T10:00:00Z",
            "updated_at": "2026-01-01T10:05:00Z",
        }));
    });
    let overview = server.mock(|when, then| {
        when.method(Method::GET).path("/orders").query_param("limit", "50");
        then.status(200).json_body(json!([{
            "id": "order-e2e",
            "restaurant_id": "resto-roma",
            "status": "COMPLETED",
            "total_amount": 35.0,
            "items": null,
            "payment_reference": "pay-123",
            "failure_reason": null,
            "created_at": "2026-01-01T10:00:00Z",
            "updated_at": "2026-01-01T10:05:00Z",
        }]));
    });

    let mut controller = controller_for(&server);

    controller.load_restaurants().await;
    assert_eq!(controller.restaurants().len(), 1);
    assert!(controller.notice().is_none());

    controller.select_restaurant("resto-roma").await;
    controller.add_item("roma-carbonara");
    controller.add_item("roma-carbonara");
    controller.add_item("roma-margherita");
    assert_eq!(controller.cart_totals().grand_total, 35.0);

    controller.submit_order(Some("table 4"), None).await.unwrap();
    assert_eq!(controller.phase(), SubmissionPhase::Confirmed);
    assert!(controller.cart_is_empty());
    assert_eq!(controller.active_order().unwrap().status, "PENDING");
    create.assert();

    controller.refresh_status("order-e2e").await.unwrap();
    let active = controller.active_order().unwrap();
    assert_eq!(active.status, "COMPLETED");
    assert_eq!(active.payment_reference.as_deref(), Some("pay-123"));
    assert_eq!(controller.overview().len(), 1);
    // Submission success and the explicit refresh both reload the overview.
    overview.assert_calls(2);
}

#[tokio::test]
async fn saga_compensation_surfaces_as_submission_error_with_lookup() {
    let server = MockServer::start();

    let _menu = server.mock(|when, then| {
        when.method(Method::GET).path("/restaurants/resto-kyoto/menu");
        then.status(200).json_body(json!([
            {"id": "kyoto-ramen", "name": "Shoyu Ramen", "price": 13.0, "available": true},
        ]));
    });
    let create = server.mock(|when, then| {
        when.method(Method::POST).path("/orders");
        then.status(500).body("payment declined");
    });
    // Any order id: the client generates it, so match on the path shape.
    let lookup = server.mock(|when, then| {
        when.method(Method::GET)
            .path_matches(Regex::new("^/orders/[0-9a-f-]+$").unwrap());
        then.status(200).json_body(json!({
            "id": "will-be-replaced",
            "restaurant_id": "resto-kyoto",
            "status": "COMPENSATED",
            "total_amount": null,
            "items": null,
            "payment_reference": null,
            "failure_reason": "payment declined",
            "created_at": "2026-01-01T10:00:00Z",
            "updated_at": "2026-01-01T10:00:01Z",
        }));
    });
    let _overview = server.mock(|when, then| {
        when.method(Method::GET).path("/orders").query_param("limit", "50");
        then.status(200).json_body(json!([]));
    });

    let mut controller = controller_for(&server);
    controller.select_restaurant("resto-kyoto").await;
    controller.add_item("kyoto-ramen");

    let err = controller
        .submit_order(None, Some(saga_order_client::model::SimulationMode::PaymentFailure))
        .await
        .unwrap_err();

    assert_eq!(controller.phase(), SubmissionPhase::SubmissionFailed);
    assert!(err.to_string().contains("payment declined"));
    create.assert();
    // Exactly one best-effort lookup with the generated id.
    lookup.assert();

    let active = controller.active_order().unwrap();
    assert_eq!(active.status, "COMPENSATED");
    assert_eq!(active.failure_reason.as_deref(), Some("payment declined"));
}

#[tokio::test]
async fn unreachable_services_still_allow_browsing_demo_data() {
    // No mocks registered: every route answers 404.
    let server = MockServer::start();
    let mut controller = controller_for(&server);

    controller.load_restaurants().await;
    assert_eq!(controller.restaurants().len(), 2);
    assert!(controller.notice().is_some());

    controller.select_restaurant("resto-roma").await;
    assert_eq!(controller.menu().len(), 2);

    controller.add_item("roma-carbonara");
    let totals = controller.cart_totals();
    assert_eq!(totals.grand_total, 12.5);

    // Submission must NOT be papered over with demo data: the failure
    // surfaces as an explicit error.
    let err = controller.submit_order(None, None).await.unwrap_err();
    assert_eq!(controller.phase(), SubmissionPhase::SubmissionFailed);
    assert!(controller.submission_error().is_some());
    assert!(!err.to_string().is_empty());

    let _ = controller.refresh_overview(DEFAULT_OVERVIEW_LIMIT).await;
    assert!(controller.overview().is_empty());
}
