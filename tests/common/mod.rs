//! In-memory store and gateway fakes shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use payment_order_service::config::FunctionsConfig;
use payment_order_service::payments::types::{
    CreateOrderRequest, GatewayConfig, GatewayErrorDetail, GatewayOrder, OrderStatus,
};
use payment_order_service::payments::{
    GatewayConnector, OrderGateway, PaymentError, PaymentResult,
};
use payment_order_service::store::{
    ConfigStore, OrderRecord, OrderStore, RecordId, StoreError, StoreResult, StoredGatewayConfig,
};
use payment_order_service::AppState;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

pub const USER_HEADER: &str = "x-verified-user-id";

pub struct FakeConfigStore {
    result: Mutex<StoreResult<Option<StoredGatewayConfig>>>,
    calls: AtomicUsize,
}

impl FakeConfigStore {
    pub fn with(result: StoreResult<Option<StoredGatewayConfig>>) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(result),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn valid() -> Arc<Self> {
        Self::with(Ok(Some(StoredGatewayConfig {
            key_id: Some("rzp_test_ABCDEFGH1234".to_string()),
            key_secret: Some("s".to_string()),
            environment: Some("test".to_string()),
        })))
    }

    pub fn missing() -> Arc<Self> {
        Self::with(Ok(None))
    }

    pub fn failing() -> Arc<Self> {
        Self::with(Err(StoreError::Connection("store unavailable".to_string())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigStore for FakeConfigStore {
    async fn fetch_gateway_config(&self) -> StoreResult<Option<StoredGatewayConfig>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct FakeOrderStore {
    records: Mutex<Vec<OrderRecord>>,
    fail: bool,
}

impl FakeOrderStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn records(&self) -> Vec<OrderRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderStore for FakeOrderStore {
    async fn insert_order(&self, record: &OrderRecord) -> StoreResult<RecordId> {
        if self.fail {
            return Err(StoreError::Query("insert rejected".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(Uuid::new_v4())
    }
}

/// Gateway fake that records every order request it receives.
pub struct FakeConnector {
    error: Option<PaymentError>,
    requests: Arc<Mutex<Vec<CreateOrderRequest>>>,
    connects: AtomicUsize,
}

impl FakeConnector {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            connects: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: PaymentError) -> Arc<Self> {
        Arc::new(Self {
            error: Some(error),
            requests: Arc::new(Mutex::new(Vec::new())),
            connects: AtomicUsize::new(0),
        })
    }

    pub fn bad_request(description: &str) -> Arc<Self> {
        Self::failing(PaymentError::GatewayError {
            http_status: 400,
            detail: GatewayErrorDetail {
                code: "BAD_REQUEST_ERROR".to_string(),
                description: description.to_string(),
                ..Default::default()
            },
        })
    }

    pub fn requests(&self) -> Vec<CreateOrderRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of remote calls attempted.
    pub fn remote_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

struct FakeGateway {
    error: Option<PaymentError>,
    requests: Arc<Mutex<Vec<CreateOrderRequest>>>,
}

#[async_trait]
impl OrderGateway for FakeGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> PaymentResult<GatewayOrder> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(GatewayOrder {
            id: "order_TEST123".to_string(),
            amount: request.amount,
            currency: request.currency.clone(),
            receipt: request.receipt.clone(),
            status: OrderStatus::Created,
            raw: serde_json::json!({
                "id": "order_TEST123",
                "entity": "order",
                "amount": request.amount,
                "currency": request.currency,
                "receipt": request.receipt,
                "status": "created",
            }),
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

impl GatewayConnector for FakeConnector {
    fn connect(&self, _config: &GatewayConfig) -> PaymentResult<Box<dyn OrderGateway>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeGateway {
            error: self.error.clone(),
            requests: self.requests.clone(),
        }))
    }
}

pub fn state(
    config: Arc<FakeConfigStore>,
    orders: Arc<FakeOrderStore>,
    gateway: Arc<FakeConnector>,
) -> AppState {
    AppState::new(config, orders, gateway, FunctionsConfig::default())
}

/// Sends a request to the router and returns status, headers and JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: Router,
    method: Method,
    path: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json");
    if let Some(uid) = caller {
        builder = builder.header(USER_HEADER, uid);
    }
    let request = builder
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

/// POSTs a callable `{"data": ...}` envelope.
pub async fn call(
    app: Router,
    path: &str,
    caller: Option<&str>,
    data: Value,
) -> (StatusCode, Value) {
    let (status, _, body) = send(
        app,
        Method::POST,
        path,
        caller,
        Some(serde_json::json!({ "data": data })),
    )
    .await;
    (status, body)
}
