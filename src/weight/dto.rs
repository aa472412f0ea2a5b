use serde::{Deserialize, Serialize};

use crate::weight::services::ProgressPoint;

/// Request body to append a weighing. `date` defaults to today.
#[derive(Debug, Deserialize)]
pub struct NewWeightRequest {
    pub weight: f64,
    pub date: Option<String>,
}

/// Chart-ready record returned by `GET /weight`.
#[derive(Debug, Serialize)]
pub struct WeightRecordDto {
    pub date: String,
    pub weight: f64,
}

/// Everything the stats screen needs in one response.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub start_weight: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub percentage: f64,
    pub series: Vec<ProgressPoint>,
}
