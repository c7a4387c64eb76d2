//! # Mock Gateway
//!
//! A scripted [`OrderGateway`] for testing controller logic without a
//! server. Responses are queued per operation and popped in FIFO order;
//! every call is recorded so tests can assert exactly which remote
//! operations were (or were not) issued.
//!
//! When an operation's queue is empty the mock answers with a transport
//! error instead of panicking, so best-effort paths (overview refresh after
//! a failure) stay exercisable without scripting every trailing call.
//!
//! The mock is cheap to clone: clones share the same queues and call log,
//! so a test can keep a handle after moving a clone into the controller.

use crate::gateway::{GatewayError, OrderGateway};
use crate::model::{MenuItem, OrderRequest, OrderSummary, Restaurant};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded call against the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListRestaurants,
    FetchMenu(String),
    CreateOrder(OrderRequest),
    FetchOrder(String),
    ListOrders(usize),
}

#[derive(Default)]
struct Script {
    restaurants: VecDeque<Result<Vec<Restaurant>, GatewayError>>,
    menus: VecDeque<Result<Vec<MenuItem>, GatewayError>>,
    creates: VecDeque<Result<OrderSummary, GatewayError>>,
    orders: VecDeque<Result<OrderSummary, GatewayError>>,
    lists: VecDeque<Result<Vec<OrderSummary>, GatewayError>>,
}

/// Scripted in-memory gateway.
#[derive(Clone, Default)]
pub struct MockGateway {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_restaurants(&self, response: Result<Vec<Restaurant>, GatewayError>) {
        self.script.lock().unwrap().restaurants.push_back(response);
    }

    pub fn enqueue_menu(&self, response: Result<Vec<MenuItem>, GatewayError>) {
        self.script.lock().unwrap().menus.push_back(response);
    }

    pub fn enqueue_create(&self, response: Result<OrderSummary, GatewayError>) {
        self.script.lock().unwrap().creates.push_back(response);
    }

    pub fn enqueue_order(&self, response: Result<OrderSummary, GatewayError>) {
        self.script.lock().unwrap().orders.push_back(response);
    }

    pub fn enqueue_list(&self, response: Result<Vec<OrderSummary>, GatewayError>) {
        self.script.lock().unwrap().lists.push_back(response);
    }

    /// Snapshot of all calls recorded so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drops the recorded calls, keeping any remaining scripted responses.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn unscripted(op: &str) -> GatewayError {
        GatewayError::Transport(format!("no scripted response for {op}"))
    }
}

#[async_trait]
impl OrderGateway for MockGateway {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, GatewayError> {
        self.record(GatewayCall::ListRestaurants);
        let next = self.script.lock().unwrap().restaurants.pop_front();
        next.unwrap_or_else(|| Err(Self::unscripted("list_restaurants")))
    }

    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, GatewayError> {
        self.record(GatewayCall::FetchMenu(restaurant_id.to_string()));
        let next = self.script.lock().unwrap().menus.pop_front();
        next.unwrap_or_else(|| Err(Self::unscripted("fetch_menu")))
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderSummary, GatewayError> {
        self.record(GatewayCall::CreateOrder(request.clone()));
        let next = self.script.lock().unwrap().creates.pop_front();
        next.unwrap_or_else(|| Err(Self::unscripted("create_order")))
    }

    async fn fetch_order(&self, order_id: &str) -> Result<OrderSummary, GatewayError> {
        self.record(GatewayCall::FetchOrder(order_id.to_string()));
        let next = self.script.lock().unwrap().orders.pop_front();
        next.unwrap_or_else(|| Err(Self::unscripted("fetch_order")))
    }

    async fn list_orders(&self, limit: usize) -> Result<Vec<OrderSummary>, GatewayError> {
        self.record(GatewayCall::ListOrders(limit));
        let next = self.script.lock().unwrap().lists.pop_front();
        next.unwrap_or_else(|| Err(Self::unscripted("list_orders")))
    }
}
