use crate::config::GatewayClientConfig;
use crate::payments::error::{PaymentError, PaymentResult};
use crate::payments::provider::OrderGateway;
use crate::payments::types::{
    CreateOrderRequest, GatewayConfig, GatewayErrorDetail, GatewayOrder, OrderStatus,
};
use crate::payments::utils::{PaymentHttpClient, ProviderHttpResponse, MAX_RECEIPT_LEN};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{info, warn};

const PROVIDER: &str = "razorpay";

pub struct RazorpayProvider {
    credentials: GatewayConfig,
    base_url: String,
    http: PaymentHttpClient,
}

impl RazorpayProvider {
    pub fn new(credentials: GatewayConfig, client: &GatewayClientConfig) -> PaymentResult<Self> {
        let http = PaymentHttpClient::new(Duration::from_secs(client.timeout_secs))?;
        Ok(Self {
            credentials,
            base_url: client.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn validate(request: &CreateOrderRequest) -> PaymentResult<()> {
        if request.amount <= 0 {
            return Err(PaymentError::ValidationError {
                message: "amount must be a positive number of minor units".to_string(),
                field: Some("amount".to_string()),
            });
        }
        if request.currency.trim().is_empty() {
            return Err(PaymentError::ValidationError {
                message: "currency is required".to_string(),
                field: Some("currency".to_string()),
            });
        }
        if request.receipt.chars().count() > MAX_RECEIPT_LEN {
            return Err(PaymentError::ValidationError {
                message: format!("receipt must be at most {} characters", MAX_RECEIPT_LEN),
                field: Some("receipt".to_string()),
            });
        }
        Ok(())
    }

    fn decode_order(response: &ProviderHttpResponse) -> PaymentResult<GatewayOrder> {
        let raw: JsonValue =
            serde_json::from_str(&response.body).map_err(|e| PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("invalid provider JSON response: {}", e),
                provider_code: Some(response.status.to_string()),
            })?;
        let order: RazorpayOrderBody =
            serde_json::from_value(raw.clone()).map_err(|e| PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("unexpected order payload: {}", e),
                provider_code: Some(response.status.to_string()),
            })?;

        Ok(GatewayOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt.unwrap_or_default(),
            status: order.status,
            raw,
        })
    }

    fn decode_error(response: &ProviderHttpResponse) -> PaymentError {
        match serde_json::from_str::<RazorpayErrorEnvelope>(&response.body) {
            Ok(envelope) => PaymentError::GatewayError {
                http_status: response.status,
                detail: envelope.error,
            },
            Err(_) => PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!(
                    "HTTP {}: {}",
                    response.status,
                    response.body.chars().take(200).collect::<String>()
                ),
                provider_code: Some(response.status.to_string()),
            },
        }
    }
}

#[async_trait]
impl OrderGateway for RazorpayProvider {
    async fn create_order(&self, request: CreateOrderRequest) -> PaymentResult<GatewayOrder> {
        Self::validate(&request)?;

        let payload = serde_json::json!({
            "amount": request.amount,
            "currency": request.currency,
            "receipt": request.receipt,
            "notes": request.notes,
        });

        let response = self
            .http
            .request_json(
                reqwest::Method::POST,
                &self.endpoint("/v1/orders"),
                Some((
                    self.credentials.key_id.as_str(),
                    self.credentials.key_secret.as_str(),
                )),
                Some(&payload),
            )
            .await?;

        if !response.is_success() {
            let err = Self::decode_error(&response);
            warn!(status = response.status, error = %err, "razorpay rejected order");
            return Err(err);
        }

        let order = Self::decode_order(&response)?;
        info!(order_id = %order.id, amount = order.amount, "razorpay order created");
        Ok(order)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderBody {
    id: String,
    amount: i64,
    currency: String,
    #[serde(default)]
    receipt: Option<String>,
    status: OrderStatus,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
    error: GatewayErrorDetail,
}
