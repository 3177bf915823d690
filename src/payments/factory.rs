use crate::config::GatewayClientConfig;
use crate::payments::error::PaymentResult;
use crate::payments::provider::{GatewayConnector, OrderGateway};
use crate::payments::providers::RazorpayProvider;
use crate::payments::types::GatewayConfig;

/// Builds a fresh Razorpay client per invocation from the credentials read
/// out of the store. Nothing is cached between invocations.
#[derive(Debug, Clone)]
pub struct RazorpayConnector {
    client: GatewayClientConfig,
}

impl RazorpayConnector {
    pub fn new(client: GatewayClientConfig) -> Self {
        Self { client }
    }
}

impl GatewayConnector for RazorpayConnector {
    fn connect(&self, config: &GatewayConfig) -> PaymentResult<Box<dyn OrderGateway>> {
        Ok(Box::new(RazorpayProvider::new(config.clone(), &self.client)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_builds_razorpay_client() {
        let connector = RazorpayConnector::new(GatewayClientConfig::default());
        let gateway = connector
            .connect(&GatewayConfig {
                key_id: "rzp_test_1".to_string(),
                key_secret: "secret".to_string(),
                environment: Some("test".to_string()),
            })
            .expect("connect should succeed");
        assert_eq!(gateway.name(), "razorpay");
    }
}
