use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    catalog::{
        dto::{
            AnnotatedFood, FoodListParams, RecipeListParams, UpsertFoodRequest,
            UpsertRecipeRequest,
        },
        repo,
        repo_types::Recipe,
        services,
    },
    profile,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods))
        .route("/recipes", get(list_recipes))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/foods", post(upsert_food))
        .route("/admin/foods/:id", delete(delete_food))
        .route("/admin/recipes", post(upsert_recipe))
        .route("/admin/recipes/:id", delete(delete_recipe))
}

/// The whole catalog, annotated with the verdict for the caller's blood
/// type. A row with a broken recommendation mapping fails the request; the
/// catalog is reference data and must load whole or not at all.
#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<FoodListParams>,
) -> Result<Json<Vec<AnnotatedFood>>, (StatusCode, String)> {
    let profile = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;

    let rows = repo::list_foods(&state.db).await.map_err(internal)?;
    let catalog = services::validate_catalog(rows).map_err(|e| {
        error!(error = %e, "catalog failed validation");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let mut foods = services::annotate(&catalog, profile.blood_type);
    if let Some(category) = params.category {
        foods.retain(|f| f.category == category);
    }
    if let Some(search) = params.search.filter(|s| !s.trim().is_empty()) {
        let needle = search.to_lowercase();
        foods.retain(|f| f.name.to_lowercase().contains(&needle));
    }
    Ok(Json(foods))
}

/// Recipes applicable to the caller's blood type, optionally narrowed to a
/// meal type.
#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<RecipeListParams>,
) -> Result<Json<Vec<Recipe>>, (StatusCode, String)> {
    let profile = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;

    let mut recipes = repo::list_recipes(&state.db).await.map_err(internal)?;
    recipes.retain(|r| r.suits(profile.blood_type));
    if let Some(meal_type) = params.meal_type {
        recipes.retain(|r| r.meal_type == meal_type);
    }
    Ok(Json(recipes))
}

// --- admin handlers ---

async fn ensure_admin(state: &AppState, user_id: Uuid) -> Result<(), (StatusCode, String)> {
    let profile = profile::repo::find(&state.db, user_id)
        .await
        .map_err(internal)?;
    match profile {
        Some(p) if p.is_admin() => Ok(()),
        _ => {
            warn!(%user_id, "admin route denied");
            Err((StatusCode::FORBIDDEN, "Admin access required".into()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn upsert_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpsertFoodRequest>,
) -> Result<Json<AnnotatedFood>, (StatusCode, String)> {
    ensure_admin(&state, user_id).await?;

    let row = repo::upsert_food(&state.db, &payload).await.map_err(|e| {
        error!(error = %e, "food upsert failed");
        internal(e)
    })?;
    info!(food_id = %row.id, "food item saved");

    // Echo the saved row annotated for the admin's own profile.
    let profile = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;
    let catalog = services::validate_catalog(vec![row]).map_err(|e| internal(e.into()))?;
    let annotated = services::annotate(&catalog, profile.blood_type)
        .into_iter()
        .next()
        .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "empty projection".into()))?;
    Ok(Json(annotated))
}

#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    ensure_admin(&state, user_id).await?;
    let removed = repo::delete_food(&state.db, id).await.map_err(internal)?;
    if removed {
        info!(food_id = %id, "food item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Food item not found".into()))
    }
}

#[instrument(skip(state, payload))]
pub async fn upsert_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpsertRecipeRequest>,
) -> Result<Json<Recipe>, (StatusCode, String)> {
    ensure_admin(&state, user_id).await?;

    if payload.calories < 0 {
        return Err((StatusCode::BAD_REQUEST, "calories must be >= 0".into()));
    }

    let recipe = repo::upsert_recipe(&state.db, &payload).await.map_err(|e| {
        error!(error = %e, "recipe upsert failed");
        internal(e)
    })?;
    info!(recipe_id = %recipe.id, "recipe saved");
    Ok(Json(recipe))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    ensure_admin(&state, user_id).await?;
    let removed = repo::delete_recipe(&state.db, id).await.map_err(internal)?;
    if removed {
        info!(recipe_id = %id, "recipe deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Recipe not found".into()))
    }
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use crate::catalog::repo_types::{FoodCategory, FoodStatus};

    #[test]
    fn annotated_food_serializes_user_status() {
        let food = AnnotatedFood {
            id: Uuid::new_v4(),
            name: "Salmon".into(),
            category: FoodCategory::Protein,
            image_url: "https://example.com/salmon.jpg".into(),
            user_status: FoodStatus::Beneficial,
        };
        let json = serde_json::to_string(&food).unwrap();
        assert!(json.contains("\"user_status\":\"Beneficial\""));
        assert!(json.contains("\"category\":\"Protein\""));
    }
}
