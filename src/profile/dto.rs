use serde::Deserialize;

use crate::profile::repo_types::{BloodType, RhFactor};

/// Request body for a full profile update from the profile screen.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub blood_type: BloodType,
    pub rh_factor: RhFactor,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub weeks_on_diet: i32,
    pub avatar_url: Option<String>,
}
