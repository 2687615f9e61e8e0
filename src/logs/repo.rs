use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A single body-weight measurement. Append-only; never updated or deleted
/// except by cascade when the account goes away.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightLog {
    pub id: i64,
    pub user_id: Uuid,
    pub weight: f64,
    pub logged_at: OffsetDateTime,
}

pub async fn append(db: &PgPool, user_id: Uuid, weight: f64) -> Result<WeightLog, sqlx::Error> {
    sqlx::query_as::<_, WeightLog>(
        r#"
        INSERT INTO weight_logs (user_id, weight)
        VALUES ($1, $2)
        RETURNING id, user_id, weight, logged_at
        "#,
    )
    .bind(user_id)
    .bind(weight)
    .fetch_one(db)
    .await
}

/// Insertion order (sequence id), oldest first.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<WeightLog>, sqlx::Error> {
    sqlx::query_as::<_, WeightLog>(
        r#"
        SELECT id, user_id, weight, logged_at
        FROM weight_logs
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
