use crate::error::HandlerError;
use crate::logging::mask_key_id;
use crate::store::{ConfigStore, StoredGatewayConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the setup diagnostic is allowed to reveal about the credentials
/// record. Holds neither the secret nor the full key id.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetupDiagnostic {
    pub config_exists: bool,
    pub has_key_id: bool,
    pub has_key_secret: bool,
    pub environment: Option<String>,
    pub key_id_prefix: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SetupDiagnostic {
    pub fn absent(timestamp: DateTime<Utc>) -> Self {
        Self {
            config_exists: false,
            has_key_id: false,
            has_key_secret: false,
            environment: None,
            key_id_prefix: None,
            timestamp,
        }
    }

    pub fn from_stored(stored: &StoredGatewayConfig, timestamp: DateTime<Utc>) -> Self {
        let key_id = stored
            .key_id
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        let has_key_secret = stored
            .key_secret
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false);

        Self {
            config_exists: true,
            has_key_id: key_id.is_some(),
            has_key_secret,
            environment: stored.environment.clone(),
            key_id_prefix: key_id.map(mask_key_id),
            timestamp,
        }
    }
}

pub async fn inspect_setup(store: &dyn ConfigStore) -> Result<SetupDiagnostic, HandlerError> {
    let now = Utc::now();
    Ok(match store.fetch_gateway_config().await? {
        Some(stored) => SetupDiagnostic::from_stored(&stored, now),
        None => SetupDiagnostic::absent(now),
    })
}
