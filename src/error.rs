//! Handler error taxonomy
//!
//! Every entry point reports failures through [`HandlerError`]. Gateway
//! failures are decided at the HTTP boundary of the Razorpay client and
//! arrive here as the structured [`HandlerError::Gateway`] variant, so no
//! caller ever inspects an error's shape to find gateway fields.

use crate::payments::types::GatewayErrorDetail;
use crate::payments::PaymentError;
use crate::store::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    #[error("The function must be called while authenticated")]
    Unauthenticated,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Razorpay configuration not found")]
    ConfigMissing,

    #[error("Razorpay configuration is incomplete: missing {}", .0.join(", "))]
    ConfigIncomplete(Vec<&'static str>),

    #[error("Razorpay error: {}", .0.description)]
    Gateway(GatewayErrorDetail),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("Health check failed: {0}")]
    HealthCheck(String),

    #[error("{0}")]
    Unknown(String),
}

/// Canonical status codes of the callable protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallableStatus {
    Unauthenticated,
    InvalidArgument,
    FailedPrecondition,
    Internal,
}

impl CallableStatus {
    pub fn http_status(&self) -> u16 {
        match self {
            CallableStatus::Unauthenticated => 401,
            CallableStatus::InvalidArgument => 400,
            CallableStatus::FailedPrecondition => 400,
            CallableStatus::Internal => 500,
        }
    }
}

impl HandlerError {
    pub fn status(&self) -> CallableStatus {
        match self {
            HandlerError::Unauthenticated => CallableStatus::Unauthenticated,
            HandlerError::InvalidAmount(_) | HandlerError::InvalidCurrency(_) => {
                CallableStatus::InvalidArgument
            }
            HandlerError::ConfigMissing | HandlerError::ConfigIncomplete(_) => {
                CallableStatus::FailedPrecondition
            }
            HandlerError::Gateway(_)
            | HandlerError::Persistence(_)
            | HandlerError::HealthCheck(_)
            | HandlerError::Unknown(_) => CallableStatus::Internal,
        }
    }

    pub fn gateway_detail(&self) -> Option<&GatewayErrorDetail> {
        match self {
            HandlerError::Gateway(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<PaymentError> for HandlerError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::GatewayError { detail, .. } => HandlerError::Gateway(detail),
            other => HandlerError::Unknown(other.to_string()),
        }
    }
}
