use crate::database::error::DatabaseError;
use crate::store::{ConfigStore, StoreResult, StoredGatewayConfig};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Payment Provider Configuration entity
#[derive(Debug, Clone, FromRow)]
pub struct ProviderConfig {
    pub provider: String,
    pub settings: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Reads gateway credentials from `payment_provider_configs`.
pub struct ProviderConfigRepository {
    pool: PgPool,
    provider: String,
}

impl ProviderConfigRepository {
    pub fn new(pool: PgPool, provider: impl Into<String>) -> Self {
        Self {
            pool,
            provider: provider.into(),
        }
    }

    /// Find provider configuration by provider name
    pub async fn find_by_provider(
        &self,
        provider: &str,
    ) -> Result<Option<ProviderConfig>, DatabaseError> {
        sqlx::query_as::<_, ProviderConfig>(
            "SELECT provider, settings, created_at, updated_at
             FROM payment_provider_configs
             WHERE provider = $1",
        )
        .bind(provider)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)
    }
}

#[async_trait]
impl ConfigStore for ProviderConfigRepository {
    async fn fetch_gateway_config(&self) -> StoreResult<Option<StoredGatewayConfig>> {
        let Some(row) = self.find_by_provider(&self.provider).await? else {
            return Ok(None);
        };
        let stored: StoredGatewayConfig = serde_json::from_value(row.settings)?;
        Ok(Some(stored))
    }
}
