use crate::error::HandlerError;
use crate::payments::types::GatewayOrder;
use crate::store::{OrderRecord, OrderStore, RecordId};
use chrono::Utc;
use tracing::info;

pub const CREATED_STATUS: &str = "created";

/// Appends one record for an order the gateway has already created. A failure
/// here leaves the remote order in place.
pub async fn record_order(
    store: &dyn OrderStore,
    order: &GatewayOrder,
    caller_id: &str,
    amount_minor: i64,
    currency: &str,
) -> Result<RecordId, HandlerError> {
    let record = OrderRecord {
        order_id: order.id.clone(),
        user_id: caller_id.to_string(),
        amount: amount_minor,
        currency: currency.to_string(),
        status: CREATED_STATUS.to_string(),
        created_at: Utc::now(),
        razorpay_response: order.raw.clone(),
    };

    let id = store.insert_order(&record).await?;
    info!(record_id = %id, order_id = %order.id, user_id = %caller_id, "order recorded");
    Ok(id)
}
