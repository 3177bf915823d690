use crate::payments::types::GatewayErrorDetail;
use thiserror::Error;

pub type PaymentResult<T> = Result<T, PaymentError>;

#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
    },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Structured error body returned by the gateway.
    #[error("Razorpay error: {}", .detail.description)]
    GatewayError {
        http_status: u16,
        detail: GatewayErrorDetail,
    },

    /// Gateway answered with something we could not interpret.
    #[error("Provider error: provider={provider}, message={message}")]
    ProviderError {
        provider: String,
        message: String,
        provider_code: Option<String>,
    },
}

impl PaymentError {
    pub fn gateway_detail(&self) -> Option<&GatewayErrorDetail> {
        match self {
            PaymentError::GatewayError { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
