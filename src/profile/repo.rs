use sqlx::PgPool;
use uuid::Uuid;

/// Merges supplied attributes into the caller's row; absent fields keep
/// their stored values.
pub async fn update_details(
    db: &PgPool,
    user_id: Uuid,
    age: Option<i32>,
    height: Option<i32>,
    weight: Option<f64>,
    body_type: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET age = COALESCE($2, age),
            height = COALESCE($3, height),
            weight = COALESCE($4, weight),
            body_type = COALESCE($5, body_type)
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(age)
    .bind(height)
    .bind(weight)
    .bind(body_type)
    .execute(db)
    .await?;
    Ok(())
}
