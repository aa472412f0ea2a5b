use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::dto::{UpsertFoodRequest, UpsertRecipeRequest};
use crate::catalog::repo_types::{FoodRow, Recipe};

pub async fn list_foods(db: &PgPool) -> anyhow::Result<Vec<FoodRow>> {
    let rows = sqlx::query_as::<_, FoodRow>(
        r#"
        SELECT id, name, category, image_url, recommendations
        FROM food_items
        ORDER BY name ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn upsert_food(db: &PgPool, payload: &UpsertFoodRequest) -> anyhow::Result<FoodRow> {
    let id = payload.id.unwrap_or_else(Uuid::new_v4);
    let recommendations = serde_json::to_value(payload.recommendations)?;
    let row = sqlx::query_as::<_, FoodRow>(
        r#"
        INSERT INTO food_items (id, name, category, image_url, recommendations)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            category = EXCLUDED.category,
            image_url = EXCLUDED.image_url,
            recommendations = EXCLUDED.recommendations
        RETURNING id, name, category, image_url, recommendations
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(payload.category)
    .bind(&payload.image_url)
    .bind(recommendations)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete_food(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM food_items WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_recipes(db: &PgPool) -> anyhow::Result<Vec<Recipe>> {
    let rows = sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, title, meal_type, image_url, calories, time, difficulty,
               blood_types, ingredients, steps
        FROM recipes
        ORDER BY title ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn upsert_recipe(db: &PgPool, payload: &UpsertRecipeRequest) -> anyhow::Result<Recipe> {
    let id = payload.id.unwrap_or_else(Uuid::new_v4);
    let row = sqlx::query_as::<_, Recipe>(
        r#"
        INSERT INTO recipes (id, title, meal_type, image_url, calories, time, difficulty,
                             blood_types, ingredients, steps)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (id) DO UPDATE SET
            title = EXCLUDED.title,
            meal_type = EXCLUDED.meal_type,
            image_url = EXCLUDED.image_url,
            calories = EXCLUDED.calories,
            time = EXCLUDED.time,
            difficulty = EXCLUDED.difficulty,
            blood_types = EXCLUDED.blood_types,
            ingredients = EXCLUDED.ingredients,
            steps = EXCLUDED.steps
        RETURNING id, title, meal_type, image_url, calories, time, difficulty,
                  blood_types, ingredients, steps
        "#,
    )
    .bind(id)
    .bind(&payload.title)
    .bind(payload.meal_type)
    .bind(&payload.image_url)
    .bind(payload.calories)
    .bind(&payload.time)
    .bind(payload.difficulty)
    .bind(sqlx::types::Json(&payload.blood_types))
    .bind(sqlx::types::Json(&payload.ingredients))
    .bind(sqlx::types::Json(&payload.steps))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete_recipe(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
