//! Create-order flow
//!
//! The flow is a fixed sequence of stages. Whichever stage fails is carried
//! in the returned [`StageFailure`] together with the elapsed time, so the
//! boundary can log and report it without any shared progress counter.

use crate::config::FunctionsConfig;
use crate::error::HandlerError;
use crate::identity::CallerIdentity;
use crate::payments::types::CreateOrderRequest;
use crate::payments::utils::{generate_receipt, to_minor_units};
use crate::services::gateway_config::read_gateway_config;
use crate::services::order_logger::record_order;
use crate::AppState;
use bigdecimal::BigDecimal;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{error, info};

const ORDER_PURPOSE: &str = "payment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStage {
    AuthCheck,
    InputValidation,
    ConfigLoad,
    GatewayOrder,
    OrderLog,
}

impl OrderStage {
    pub fn number(&self) -> u8 {
        match self {
            OrderStage::AuthCheck => 1,
            OrderStage::InputValidation => 2,
            OrderStage::ConfigLoad => 3,
            OrderStage::GatewayOrder => 4,
            OrderStage::OrderLog => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::AuthCheck => "auth_check",
            OrderStage::InputValidation => "input_validation",
            OrderStage::ConfigLoad => "config_load",
            OrderStage::GatewayOrder => "gateway_order",
            OrderStage::OrderLog => "order_log",
        }
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of the create-order flow.
#[derive(Debug, Clone)]
pub struct StageFailure {
    pub stage: OrderStage,
    pub elapsed: Duration,
    pub error: HandlerError,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(detail) = self.error.gateway_detail() {
            return write!(f, "Razorpay error: {}", detail.description);
        }
        write!(
            f,
            "Order creation failed at step {} ({}): {}",
            self.stage.number(),
            self.stage,
            self.error
        )
    }
}

impl std::error::Error for StageFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Validated create-order input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    pub amount_minor: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub status: String,
}

/// Parses `{amount, currency}`. Amounts must be JSON numbers in major units
/// and must come to at least one minor unit.
pub fn parse_order_input(
    data: &JsonValue,
    settings: &FunctionsConfig,
) -> Result<OrderInput, HandlerError> {
    let amount = match data.get("amount") {
        Some(JsonValue::Number(n)) => BigDecimal::from_str(&n.to_string())
            .map_err(|_| HandlerError::InvalidAmount(format!("{} is not a number", n)))?,
        Some(JsonValue::Null) | None => {
            return Err(HandlerError::InvalidAmount("amount is required".to_string()))
        }
        Some(other) => {
            return Err(HandlerError::InvalidAmount(format!(
                "{} is not a number",
                other
            )))
        }
    };

    if amount <= BigDecimal::from(0) {
        return Err(HandlerError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    let amount_minor = match to_minor_units(&amount) {
        Some(minor) if minor >= 1 => minor,
        Some(_) => {
            return Err(HandlerError::InvalidAmount(
                "amount is smaller than one minor unit".to_string(),
            ))
        }
        None => {
            return Err(HandlerError::InvalidAmount(
                "amount is too large".to_string(),
            ))
        }
    };

    let currency = match data.get("currency") {
        Some(JsonValue::String(c)) => c.clone(),
        _ => {
            return Err(HandlerError::InvalidCurrency(
                "currency is required".to_string(),
            ))
        }
    };
    if !settings.is_supported_currency(&currency) {
        return Err(HandlerError::InvalidCurrency(format!(
            "{} is not supported",
            currency
        )));
    }

    Ok(OrderInput {
        amount_minor,
        currency,
    })
}

pub async fn create_order(
    state: &AppState,
    caller: Option<&CallerIdentity>,
    data: &JsonValue,
) -> Result<OrderSummary, StageFailure> {
    let started = Instant::now();
    let fail = |stage: OrderStage, error: HandlerError| {
        let failure = StageFailure {
            stage,
            elapsed: started.elapsed(),
            error,
        };
        error!(
            step = stage.number(),
            stage = %stage,
            elapsed_ms = failure.elapsed.as_millis() as u64,
            error = %failure.error,
            source = ?std::error::Error::source(&failure.error),
            "create order failed"
        );
        failure
    };

    let caller = caller.ok_or_else(|| fail(OrderStage::AuthCheck, HandlerError::Unauthenticated))?;
    info!(user_id = %caller.uid(), stage = %OrderStage::AuthCheck, "create order started");

    let input = parse_order_input(data, &state.settings)
        .map_err(|e| fail(OrderStage::InputValidation, e))?;
    info!(
        stage = %OrderStage::InputValidation,
        amount_minor = input.amount_minor,
        currency = %input.currency,
        "order input accepted"
    );

    let config = read_gateway_config(state.config_store.as_ref())
        .await
        .map_err(|e| fail(OrderStage::ConfigLoad, e))?;
    info!(
        stage = %OrderStage::ConfigLoad,
        environment = config.environment.as_deref().unwrap_or("unknown"),
        "gateway configuration ready"
    );

    let receipt = generate_receipt(Utc::now().timestamp_millis());
    let mut notes = BTreeMap::new();
    notes.insert("user_id".to_string(), caller.uid().to_string());
    notes.insert("purpose".to_string(), ORDER_PURPOSE.to_string());

    let gateway = state
        .gateways
        .connect(&config)
        .map_err(|e| fail(OrderStage::GatewayOrder, e.into()))?;
    let order = gateway
        .create_order(CreateOrderRequest {
            amount: input.amount_minor,
            currency: input.currency.clone(),
            receipt: receipt.clone(),
            notes,
        })
        .await
        .map_err(|e| fail(OrderStage::GatewayOrder, e.into()))?;
    info!(stage = %OrderStage::GatewayOrder, order_id = %order.id, "gateway order created");

    record_order(
        state.order_store.as_ref(),
        &order,
        caller.uid(),
        input.amount_minor,
        &input.currency,
    )
    .await
    .map_err(|e| fail(OrderStage::OrderLog, e))?;

    info!(
        order_id = %order.id,
        user_id = %caller.uid(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "create order completed"
    );

    Ok(OrderSummary {
        order_id: order.id,
        amount: input.amount_minor,
        currency: input.currency,
        receipt,
        status: order.status.as_str().to_string(),
    })
}
