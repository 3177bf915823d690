//! Health check module
//! Reports service liveness and whether the gateway configuration is readable

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::error::HandlerError;
use crate::store::ConfigStore;

pub const HEALTHY: &str = "healthy";

/// Health status response
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: &'static str,
    pub region: String,
    /// The document store answered the configuration read.
    #[serde(rename = "firestoreConnected")]
    pub store_connected: bool,
    pub config_available: bool,
}

/// Health checker for the application
#[derive(Clone)]
pub struct HealthChecker {
    config_store: Arc<dyn ConfigStore>,
    region: String,
}

impl HealthChecker {
    pub fn new(config_store: Arc<dyn ConfigStore>, region: impl Into<String>) -> Self {
        Self {
            config_store,
            region: region.into(),
        }
    }

    /// A missing configuration record is reported, not raised. Only a store
    /// fault fails the check.
    pub async fn check_health(&self) -> Result<HealthReport, HandlerError> {
        let start = Instant::now();
        let config = self.config_store.fetch_gateway_config().await.map_err(|e| {
            error!(error = %e, "Health check failed to read gateway configuration");
            HandlerError::HealthCheck(e.to_string())
        })?;

        let report = HealthReport {
            status: HEALTHY,
            timestamp: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            region: self.region.clone(),
            store_connected: true,
            config_available: config.is_some(),
        };
        info!(
            config_available = report.config_available,
            response_time_ms = start.elapsed().as_millis() as u64,
            "Health check: OK"
        );
        Ok(report)
    }
}
