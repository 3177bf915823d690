mod common;

use axum::http::StatusCode;
use common::{call, state, FakeConfigStore, FakeConnector, FakeOrderStore};
use payment_order_service::api::router;
use payment_order_service::services::connection_test::{TEST_ORDER_AMOUNT, TEST_ORDER_RECEIPT};
use serde_json::json;

const PATH: &str = "/testRazorpayConnection";

#[tokio::test]
async fn test_successful_connection_creates_one_small_order() {
    let gateway = FakeConnector::succeeding();
    let orders = FakeOrderStore::new();
    let app = router(state(FakeConfigStore::valid(), orders.clone(), gateway.clone()));

    let (status, body) = call(app, PATH, Some("admin"), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["success"], true);
    assert_eq!(result["orderId"], "order_TEST123");
    assert_eq!(result["status"], "created");
    assert_eq!(result["environment"], "test");
    assert!(result["message"].is_string());

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].amount, TEST_ORDER_AMOUNT);
    assert_eq!(requests[0].currency, "INR");
    assert_eq!(requests[0].receipt, TEST_ORDER_RECEIPT);
    assert!(orders.records().is_empty());
}

#[tokio::test]
async fn test_unauthenticated_caller_makes_no_remote_call() {
    let config = FakeConfigStore::valid();
    let gateway = FakeConnector::succeeding();
    let app = router(state(config.clone(), FakeOrderStore::new(), gateway.clone()));

    let (status, body) = call(app, PATH, None, json!({})).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["status"], "UNAUTHENTICATED");
    assert_eq!(config.calls(), 0);
    assert_eq!(gateway.remote_calls(), 0);
}

#[tokio::test]
async fn test_gateway_failure_is_a_result_with_details() {
    let app = router(state(
        FakeConfigStore::valid(),
        FakeOrderStore::new(),
        FakeConnector::bad_request("Authentication failed"),
    ));

    let (status, body) = call(app, PATH, Some("admin"), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["success"], false);
    assert_eq!(result["error"], "Razorpay error: Authentication failed");
    assert_eq!(result["details"]["code"], "BAD_REQUEST_ERROR");
}

#[tokio::test]
async fn test_missing_config_is_a_result_without_details() {
    let gateway = FakeConnector::succeeding();
    let app = router(state(
        FakeConfigStore::missing(),
        FakeOrderStore::new(),
        gateway.clone(),
    ));

    let (status, body) = call(app, PATH, Some("admin"), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["success"], false);
    assert_eq!(body["result"]["error"], "Razorpay configuration not found");
    assert!(body["result"].get("details").is_none());
    assert_eq!(gateway.remote_calls(), 0);
}
