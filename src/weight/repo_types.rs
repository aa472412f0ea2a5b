use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// One weighing. `date` is the display string shown on charts; ordering is
/// by `created_at`, ascending.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightRecord {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub date: String,
    pub weight: f64,
    #[serde(skip_serializing)]
    pub created_at: OffsetDateTime,
}
