use thiserror::Error;
use uuid::Uuid;

use crate::catalog::dto::AnnotatedFood;
use crate::catalog::repo_types::{FoodItem, FoodRow};
use crate::profile::repo_types::BloodType;

/// A catalog row that cannot be trusted. Raised at load time and treated as
/// fatal for the operation; a bad mapping is never patched per item.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("food item {id} ({name}) has an invalid recommendation mapping: {source}")]
    BadRecommendations {
        id: Uuid,
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode and validate raw food rows. Every row must carry exactly one
/// verdict per blood type; the first violation aborts the load.
pub fn validate_catalog(rows: Vec<FoodRow>) -> Result<Vec<FoodItem>, CatalogError> {
    rows.into_iter()
        .map(|row| {
            let recommendations = serde_json::from_value(row.recommendations).map_err(|source| {
                CatalogError::BadRecommendations {
                    id: row.id,
                    name: row.name.clone(),
                    source,
                }
            })?;
            Ok(FoodItem {
                id: row.id,
                name: row.name,
                category: row.category,
                image_url: row.image_url,
                recommendations,
            })
        })
        .collect()
}

/// Project the catalog for one blood type: same order, same cardinality,
/// each item annotated with its single applicable verdict.
pub fn annotate(catalog: &[FoodItem], blood_type: BloodType) -> Vec<AnnotatedFood> {
    catalog
        .iter()
        .map(|item| AnnotatedFood {
            id: item.id,
            name: item.name.clone(),
            category: item.category,
            image_url: item.image_url.clone(),
            user_status: item.recommendations.verdict(blood_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repo_types::{FoodCategory, FoodStatus, Recommendations};
    use serde_json::json;

    fn row(name: &str, recommendations: serde_json::Value) -> FoodRow {
        FoodRow {
            id: Uuid::new_v4(),
            name: name.into(),
            category: FoodCategory::Protein,
            image_url: "https://example.com/food.jpg".into(),
            recommendations,
        }
    }

    fn full_mapping() -> serde_json::Value {
        json!({"A": "Beneficial", "B": "Neutral", "AB": "Neutral", "O": "Avoid"})
    }

    #[test]
    fn annotate_keeps_order_and_cardinality() {
        let rows = vec![
            row("salmon", full_mapping()),
            row("red meat", json!({"A": "Avoid", "B": "Neutral", "AB": "Avoid", "O": "Beneficial"})),
            row("broccoli", json!({"A": "Beneficial", "B": "Beneficial", "AB": "Beneficial", "O": "Beneficial"})),
        ];
        let catalog = validate_catalog(rows).expect("catalog should validate");

        for blood_type in [BloodType::A, BloodType::B, BloodType::AB, BloodType::O] {
            let annotated = annotate(&catalog, blood_type);
            assert_eq!(annotated.len(), catalog.len());
            for (item, source) in annotated.iter().zip(&catalog) {
                assert_eq!(item.id, source.id);
                assert_eq!(item.user_status, source.recommendations.verdict(blood_type));
            }
        }
    }

    #[test]
    fn annotate_picks_the_requested_column() {
        let catalog = validate_catalog(vec![row("red meat", json!({
            "A": "Avoid", "B": "Neutral", "AB": "Avoid", "O": "Beneficial"
        }))])
        .expect("catalog should validate");

        assert_eq!(annotate(&catalog, BloodType::A)[0].user_status, FoodStatus::Avoid);
        assert_eq!(annotate(&catalog, BloodType::B)[0].user_status, FoodStatus::Neutral);
        assert_eq!(annotate(&catalog, BloodType::O)[0].user_status, FoodStatus::Beneficial);
    }

    #[test]
    fn missing_blood_type_key_fails_the_load() {
        let err = validate_catalog(vec![row("corn", json!({
            "A": "Neutral", "B": "Avoid", "AB": "Avoid"
        }))])
        .unwrap_err();
        assert!(err.to_string().contains("corn"));
    }

    #[test]
    fn unknown_key_fails_the_load() {
        let err = validate_catalog(vec![row("corn", json!({
            "A": "Neutral", "B": "Avoid", "AB": "Avoid", "O": "Avoid", "C": "Neutral"
        }))])
        .unwrap_err();
        assert!(matches!(err, CatalogError::BadRecommendations { .. }));
    }

    #[test]
    fn unknown_verdict_fails_the_load() {
        let err = validate_catalog(vec![row("corn", json!({
            "A": "Great", "B": "Avoid", "AB": "Avoid", "O": "Avoid"
        }))])
        .unwrap_err();
        assert!(matches!(err, CatalogError::BadRecommendations { .. }));
    }

    #[test]
    fn verdict_is_total_over_blood_types() {
        let recommendations = Recommendations {
            a: FoodStatus::Beneficial,
            b: FoodStatus::Neutral,
            ab: FoodStatus::Neutral,
            o: FoodStatus::Avoid,
        };
        assert_eq!(recommendations.verdict(BloodType::A), FoodStatus::Beneficial);
        assert_eq!(recommendations.verdict(BloodType::AB), FoodStatus::Neutral);
        assert_eq!(recommendations.verdict(BloodType::O), FoodStatus::Avoid);
    }
}
