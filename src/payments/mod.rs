pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod types;
pub mod utils;

pub use error::{PaymentError, PaymentResult};
pub use factory::RazorpayConnector;
pub use provider::{GatewayConnector, OrderGateway};
