use sqlx::PgPool;
use uuid::Uuid;

use crate::weight::repo_types::WeightRecord;

/// Full history for a user, oldest first.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WeightRecord>> {
    let rows = sqlx::query_as::<_, WeightRecord>(
        r#"
        SELECT id, user_id, date, weight, created_at
        FROM weight_records
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Append one record; history is append-only.
pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    date: &str,
    weight: f64,
) -> anyhow::Result<WeightRecord> {
    let row = sqlx::query_as::<_, WeightRecord>(
        r#"
        INSERT INTO weight_records (user_id, date, weight)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, date, weight, created_at
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(weight)
    .fetch_one(db)
    .await?;
    Ok(row)
}
