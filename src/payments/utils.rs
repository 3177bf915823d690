use crate::payments::error::{PaymentError, PaymentResult};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// Gateway limit on the receipt field.
pub const MAX_RECEIPT_LEN: usize = 40;

pub const RECEIPT_PREFIX: &str = "rcpt_";

/// Raw HTTP answer from a provider, before any interpretation.
#[derive(Debug, Clone)]
pub struct ProviderHttpResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderHttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thin reqwest wrapper shared by provider clients. Sends exactly one
/// request per call; there is no retry loop.
#[derive(Clone)]
pub struct PaymentHttpClient {
    client: Client,
    timeout: Duration,
}

impl PaymentHttpClient {
    pub fn new(timeout: Duration) -> PaymentResult<Self> {
        let client =
            Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| PaymentError::NetworkError {
                    message: format!("failed to initialize HTTP client: {}", e),
                })?;

        Ok(Self { client, timeout })
    }

    pub async fn request_json(
        &self,
        method: reqwest::Method,
        url: &str,
        basic_auth: Option<(&str, &str)>,
        body: Option<&JsonValue>,
    ) -> PaymentResult<ProviderHttpResponse> {
        let mut request = self.client.request(method, url).timeout(self.timeout);

        if let Some((username, password)) = basic_auth {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError {
                message: format!("provider request failed: {}", e),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError {
                message: format!("failed to read provider response: {}", e),
            })?;
        debug!(url = %url, status, "provider responded");

        Ok(ProviderHttpResponse { status, body })
    }
}

/// Converts a major-unit amount to integer minor units, rounding half away
/// from zero. Returns `None` when the result does not fit in an `i64`.
pub fn to_minor_units(amount_major: &BigDecimal) -> Option<i64> {
    (amount_major.clone() * BigDecimal::from(100))
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
}

/// Receipt id for an order created at `epoch_millis`, never longer than
/// [`MAX_RECEIPT_LEN`].
pub fn generate_receipt(epoch_millis: i64) -> String {
    truncate_receipt(&format!("{}{}", RECEIPT_PREFIX, epoch_millis))
}

pub fn truncate_receipt(receipt: &str) -> String {
    receipt.chars().take(MAX_RECEIPT_LEN).collect()
}
