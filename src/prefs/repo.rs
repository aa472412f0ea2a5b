use sqlx::PgPool;
use uuid::Uuid;

/// All flags for a user, e.g. {"dark_mode": true}.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<(String, bool)>> {
    let rows = sqlx::query_as::<_, (String, bool)>(
        r#"
        SELECT name, value
        FROM preferences
        WHERE user_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn upsert(db: &PgPool, user_id: Uuid, name: &str, value: bool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO preferences (user_id, name, value)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, name) DO UPDATE SET value = EXCLUDED.value
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(value)
    .execute(db)
    .await?;
    Ok(())
}
