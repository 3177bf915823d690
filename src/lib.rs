//! Payment order service
//!
//! Request handlers that create Razorpay orders, record them, and expose
//! health and setup diagnostics. Store and gateway access go through the
//! traits in [`store`] and [`payments::provider`] so handlers can be driven
//! by in-memory fakes.

pub mod api;
pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod error;
pub mod health;
pub mod identity;
pub mod logging;
pub mod middleware;
pub mod payments;
pub mod services;
pub mod store;

use crate::config::FunctionsConfig;
use crate::payments::GatewayConnector;
use crate::store::{ConfigStore, OrderStore};
use std::sync::Arc;

/// Dependencies shared by every handler, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config_store: Arc<dyn ConfigStore>,
    pub order_store: Arc<dyn OrderStore>,
    pub gateways: Arc<dyn GatewayConnector>,
    pub settings: Arc<FunctionsConfig>,
}

impl AppState {
    pub fn new(
        config_store: Arc<dyn ConfigStore>,
        order_store: Arc<dyn OrderStore>,
        gateways: Arc<dyn GatewayConnector>,
        settings: FunctionsConfig,
    ) -> Self {
        Self {
            config_store,
            order_store,
            gateways,
            settings: Arc::new(settings),
        }
    }
}
