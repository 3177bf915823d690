//! Callable error responses
//!
//! Failures leave the service as `{"error": {"status", "message", "details"?}}`
//! with the HTTP status of the canonical code.

use crate::error::{CallableStatus, HandlerError};
use crate::services::order_creation::StageFailure;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Wire form of a callable failure.
#[derive(Debug, Clone, Serialize)]
pub struct CallableError {
    pub status: CallableStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

#[derive(Serialize)]
struct CallableErrorBody<'a> {
    error: &'a CallableError,
}

impl CallableError {
    pub fn from_handler_error(error: &HandlerError) -> Self {
        Self {
            status: error.status(),
            message: error.to_string(),
            details: error
                .gateway_detail()
                .and_then(|d| serde_json::to_value(d).ok()),
        }
    }

    pub fn from_stage_failure(failure: &StageFailure) -> Self {
        let details = match failure.error.gateway_detail() {
            Some(detail) => serde_json::to_value(detail).ok(),
            None => Some(serde_json::json!({
                "step": failure.stage.number(),
                "stage": failure.stage.as_str(),
                "elapsedMs": failure.elapsed.as_millis() as u64,
            })),
        };
        Self {
            status: failure.error.status(),
            message: failure.to_string(),
            details,
        }
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let status_code = StatusCode::from_u16(self.status.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(status = ?self.status, message = %self.message, "Callable failed");
        } else {
            tracing::warn!(status = ?self.status, message = %self.message, "Callable rejected");
        }

        (status_code, Json(CallableErrorBody { error: &self })).into_response()
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        CallableError::from_handler_error(&self).into_response()
    }
}

impl IntoResponse for StageFailure {
    fn into_response(self) -> Response {
        CallableError::from_stage_failure(&self).into_response()
    }
}
