//! Services module for the handler flows

pub mod diagnostics;
pub mod gateway_config;
pub mod order_creation;
pub mod order_logger;

pub use connection_test::{test_gateway_connection, ConnectionTestOutcome};
pub use diagnostics::{inspect_setup, SetupDiagnostic};
pub use gateway_config::read_gateway_config;
pub use order_creation::{create_order, OrderStage, OrderSummary, StageFailure};
pub use order_logger::record_order;
