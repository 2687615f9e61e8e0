use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A saved plan. The blob is opaque here; it is parsed back verbatim when
/// listed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub plan_data: serde_json::Value,
    pub created_at: OffsetDateTime,
}

pub async fn save(
    db: &PgPool,
    user_id: Uuid,
    name: &str,
    plan_data: &serde_json::Value,
) -> Result<Plan, sqlx::Error> {
    sqlx::query_as::<_, Plan>(
        r#"
        INSERT INTO plans (user_id, name, plan_data)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, name, plan_data, created_at
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(plan_data)
    .fetch_one(db)
    .await
}

/// Most recent first. Unlike logs, this listing is explicitly sorted.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Plan>, sqlx::Error> {
    sqlx::query_as::<_, Plan>(
        r#"
        SELECT id, user_id, name, plan_data, created_at
        FROM plans
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
