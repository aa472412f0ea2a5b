use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::profile::repo_types::BloodType;

/// The only three verdicts a recommendation may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodStatus {
    Beneficial,
    Neutral,
    Avoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "food_category", rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Vegetable,
    Fruit,
    Grain,
    Dairy,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_type", rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recipe_difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One verdict per blood type. A struct field per type keeps the mapping
/// total by construction; `deny_unknown_fields` rejects stray keys when a
/// catalog row is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recommendations {
    #[serde(rename = "A")]
    pub a: FoodStatus,
    #[serde(rename = "B")]
    pub b: FoodStatus,
    #[serde(rename = "AB")]
    pub ab: FoodStatus,
    #[serde(rename = "O")]
    pub o: FoodStatus,
}

impl Recommendations {
    pub fn verdict(&self, blood_type: BloodType) -> FoodStatus {
        match blood_type {
            BloodType::A => self.a,
            BloodType::B => self.b,
            BloodType::AB => self.ab,
            BloodType::O => self.o,
        }
    }
}

/// Raw food row as stored; `recommendations` stays jsonb until the catalog
/// is validated.
#[derive(Debug, Clone, FromRow)]
pub struct FoodRow {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: String,
    pub recommendations: serde_json::Value,
}

/// A validated catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub image_url: String,
    pub recommendations: Recommendations,
}

/// Recipe record; list-shaped fields live in jsonb columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub meal_type: MealType,
    pub image_url: String,
    pub calories: i32,
    pub time: String,
    pub difficulty: Difficulty,
    pub blood_types: sqlx::types::Json<Vec<BloodType>>,
    pub ingredients: sqlx::types::Json<Vec<String>>,
    pub steps: sqlx::types::Json<Vec<String>>,
}

impl Recipe {
    pub fn suits(&self, blood_type: BloodType) -> bool {
        self.blood_types.0.contains(&blood_type)
    }
}
