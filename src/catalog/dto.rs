use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::repo_types::{
    Difficulty, FoodCategory, FoodStatus, MealType, Recommendations,
};
use crate::profile::repo_types::BloodType;

/// A catalog entry annotated with the verdict for the requesting user's
/// blood type. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedFood {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: String,
    pub user_status: FoodStatus,
}

/// Query filters for the food list.
#[derive(Debug, Default, Deserialize)]
pub struct FoodListParams {
    pub category: Option<FoodCategory>,
    pub search: Option<String>,
}

/// Query filter for the recipe list.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeListParams {
    pub meal_type: Option<MealType>,
}

/// Admin payload to create or replace a food item.
#[derive(Debug, Deserialize)]
pub struct UpsertFoodRequest {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: String,
    pub recommendations: Recommendations,
}

/// Admin payload to create or replace a recipe.
#[derive(Debug, Deserialize)]
pub struct UpsertRecipeRequest {
    pub id: Option<Uuid>,
    pub title: String,
    pub meal_type: MealType,
    pub image_url: String,
    pub calories: i32,
    pub time: String,
    pub difficulty: Difficulty,
    pub blood_types: Vec<BloodType>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}
