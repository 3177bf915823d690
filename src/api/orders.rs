use crate::api::callable::{CallableRequest, CallableResponse};
use crate::services::order_creation::{create_order, OrderSummary, StageFailure};
use crate::AppState;
use axum::extract::State;

/// POST /createRazorpayOrder
pub async fn create_razorpay_order(
    State(state): State<AppState>,
    request: CallableRequest,
) -> Result<CallableResponse<OrderSummary>, StageFailure> {
    create_order(&state, request.caller.as_ref(), &request.data)
        .await
        .map(CallableResponse)
}
