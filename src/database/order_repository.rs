use crate::database::error::DatabaseError;
use crate::store::{OrderRecord, OrderStore, RecordId, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// Append-only writer for `razorpay_orders`. Rows are never updated or
/// deleted by this service.
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &OrderRecord) -> Result<RecordId, DatabaseError> {
        sqlx::query_scalar::<_, RecordId>(
            "INSERT INTO razorpay_orders
                (order_id, user_id, amount, currency, status, created_at, razorpay_response)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&record.order_id)
        .bind(&record.user_id)
        .bind(record.amount)
        .bind(&record.currency)
        .bind(&record.status)
        .bind(record.created_at)
        .bind(&record.razorpay_response)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_sqlx)
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert_order(&self, record: &OrderRecord) -> StoreResult<RecordId> {
        Ok(self.insert(record).await?)
    }
}
