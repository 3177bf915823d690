use crate::payments::error::PaymentResult;
use crate::payments::types::{CreateOrderRequest, GatewayConfig, GatewayOrder};
use async_trait::async_trait;

/// A gateway client bound to one set of credentials.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Creates exactly one order at the gateway. Not idempotent: two calls
    /// with the same request create two orders.
    async fn create_order(&self, request: CreateOrderRequest) -> PaymentResult<GatewayOrder>;

    fn name(&self) -> &'static str;
}

/// Builds a gateway client from credentials read during the invocation.
pub trait GatewayConnector: Send + Sync {
    fn connect(&self, config: &GatewayConfig) -> PaymentResult<Box<dyn OrderGateway>>;
}
