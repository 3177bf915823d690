//! Document store seams used by the handlers.
//!
//! The service only ever does a point read of the gateway configuration
//! record and an append of order records, so the store is modelled as two
//! small traits. The Postgres implementations live in [`crate::database`];
//! tests substitute in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

pub type RecordId = Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store query error: {0}")]
    Query(String),

    #[error("store serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Gateway configuration record as it sits in the store.
///
/// Every field is optional here; completeness is checked by
/// [`crate::services::gateway_config::read_gateway_config`] so that the
/// setup diagnostic can still report on a half-filled record.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredGatewayConfig {
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub key_secret: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl fmt::Debug for StoredGatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredGatewayConfig")
            .field("key_id", &self.key_id.as_deref().map(crate::logging::mask_key_id))
            .field("key_secret", &self.key_secret.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .finish()
    }
}

/// Append-only record of an order created at the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub user_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub razorpay_response: JsonValue,
}

/// Point read of the singleton gateway configuration record.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Returns `Ok(None)` when the record does not exist.
    async fn fetch_gateway_config(&self) -> StoreResult<Option<StoredGatewayConfig>>;
}

/// Append-only order collection.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, record: &OrderRecord) -> StoreResult<RecordId>;
}
