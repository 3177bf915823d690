//! Razorpay client against a mocked HTTP endpoint.

use mockito::Matcher;
use payment_order_service::config::GatewayClientConfig;
use payment_order_service::payments::providers::RazorpayProvider;
use payment_order_service::payments::types::{CreateOrderRequest, GatewayConfig, OrderStatus};
use payment_order_service::payments::{OrderGateway, PaymentError};
use serde_json::json;
use std::collections::BTreeMap;

fn provider(base_url: String) -> RazorpayProvider {
    RazorpayProvider::new(
        GatewayConfig {
            key_id: "rzp_test_1".to_string(),
            key_secret: "secret".to_string(),
            environment: Some("test".to_string()),
        },
        &GatewayClientConfig {
            base_url,
            timeout_secs: 5,
            config_key: "razorpay".to_string(),
        },
    )
    .expect("provider")
}

fn request() -> CreateOrderRequest {
    let mut notes = BTreeMap::new();
    notes.insert("user_id".to_string(), "user_1".to_string());
    CreateOrderRequest {
        amount: 50000,
        currency: "INR".to_string(),
        receipt: "rcpt_1700000000000".to_string(),
        notes,
    }
}

#[tokio::test]
async fn test_create_order_posts_with_basic_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/orders")
        .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
        .match_body(Matcher::PartialJson(json!({
            "amount": 50000,
            "currency": "INR",
            "receipt": "rcpt_1700000000000",
            "notes": { "user_id": "user_1" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "order_IluGWxBm9U8zJ8",
                "entity": "order",
                "amount": 50000,
                "amount_paid": 0,
                "currency": "INR",
                "receipt": "rcpt_1700000000000",
                "status": "created",
                "attempts": 0,
                "created_at": 1700000000
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let order = provider(server.url())
        .create_order(request())
        .await
        .expect("order");

    mock.assert_async().await;
    assert_eq!(order.id, "order_IluGWxBm9U8zJ8");
    assert_eq!(order.amount, 50000);
    assert_eq!(order.status, OrderStatus::Created);
    assert_eq!(order.raw["attempts"], 0);
}

#[tokio::test]
async fn test_structured_error_keeps_gateway_fields() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/orders")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "code": "BAD_REQUEST_ERROR",
                    "description": "Order amount less than minimum amount allowed",
                    "source": "business",
                    "step": "payment_initiation",
                    "reason": "input_validation_failed",
                    "metadata": {},
                    "field": "amount"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = provider(server.url())
        .create_order(request())
        .await
        .unwrap_err();

    match err {
        PaymentError::GatewayError {
            http_status,
            detail,
        } => {
            assert_eq!(http_status, 400);
            assert_eq!(detail.code, "BAD_REQUEST_ERROR");
            assert_eq!(detail.field.as_deref(), Some("amount"));
            assert_eq!(detail.source.as_deref(), Some("business"));
            assert_eq!(detail.reason.as_deref(), Some("input_validation_failed"));
        }
        other => panic!("expected gateway error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unstructured_error_is_not_a_gateway_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/orders")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = provider(server.url())
        .create_order(request())
        .await
        .unwrap_err();

    assert!(err.gateway_detail().is_none());
    assert!(matches!(err, PaymentError::ProviderError { .. }));
}

#[tokio::test]
async fn test_undecodable_success_body_is_provider_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/orders")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = provider(server.url())
        .create_order(request())
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::ProviderError { .. }));
}

#[tokio::test]
async fn test_long_receipt_is_rejected_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/orders")
        .expect(0)
        .create_async()
        .await;

    let mut long = request();
    long.receipt = "r".repeat(41);
    let err = provider(server.url()).create_order(long).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, PaymentError::ValidationError { .. }));
}

#[tokio::test]
async fn test_unreachable_gateway_is_network_error() {
    let err = provider("http://127.0.0.1:1".to_string())
        .create_order(request())
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::NetworkError { .. }));
}
