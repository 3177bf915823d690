//! Configuration reader for the gateway credentials record.

use crate::error::HandlerError;
use crate::payments::types::GatewayConfig;
use crate::store::ConfigStore;
use tracing::{debug, warn};

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Single point read of the credentials record. Not cached: every call goes
/// to the store.
pub async fn read_gateway_config(store: &dyn ConfigStore) -> Result<GatewayConfig, HandlerError> {
    let stored = store
        .fetch_gateway_config()
        .await?
        .ok_or(HandlerError::ConfigMissing)?;

    let key_id = non_blank(stored.key_id.as_deref());
    let key_secret = non_blank(stored.key_secret.as_deref());

    match (key_id, key_secret) {
        (Some(key_id), Some(key_secret)) => {
            let config = GatewayConfig {
                key_id,
                key_secret,
                environment: non_blank(stored.environment.as_deref()),
            };
            debug!(config = ?config, "gateway configuration loaded");
            Ok(config)
        }
        (key_id, key_secret) => {
            let mut missing = Vec::new();
            if key_id.is_none() {
                missing.push("key_id");
            }
            if key_secret.is_none() {
                missing.push("key_secret");
            }
            warn!(missing = ?missing, "gateway configuration incomplete");
            Err(HandlerError::ConfigIncomplete(missing))
        }
    }
}
