use crate::api::callable::{CallableRequest, CallableResponse};
use crate::error::HandlerError;
use crate::services::connection_test::{test_gateway_connection, ConnectionTestOutcome};
use crate::AppState;
use axum::extract::State;

/// POST /testRazorpayConnection
pub async fn test_razorpay_connection(
    State(state): State<AppState>,
    request: CallableRequest,
) -> Result<CallableResponse<ConnectionTestOutcome>, HandlerError> {
    test_gateway_connection(&state, request.caller.as_ref())
        .await
        .map(CallableResponse)
}
