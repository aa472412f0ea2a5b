use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{error, info, instrument};

use crate::{
    auth::AuthUser,
    profile,
    state::AppState,
    weight::{
        dto::{NewWeightRequest, ProgressResponse, WeightRecordDto},
        repo, services,
    },
};

pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/weight", get(list_weight).post(add_weight))
        .route("/progress", get(get_progress))
}

#[instrument(skip(state))]
pub async fn list_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<WeightRecordDto>>, (StatusCode, String)> {
    let records = repo::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;
    let items = records
        .into_iter()
        .map(|r| WeightRecordDto {
            date: r.date,
            weight: r.weight,
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn add_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NewWeightRequest>,
) -> Result<(StatusCode, Json<WeightRecordDto>), (StatusCode, String)> {
    if !payload.weight.is_finite() || payload.weight <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "weight must be positive".into()));
    }
    let date = payload
        .date
        .unwrap_or_else(services::today_display_date);

    let record = repo::insert(&state.db, user_id, &date, payload.weight)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "weight insert failed");
            internal(e)
        })?;

    info!(%user_id, weight = record.weight, "weight record added");
    Ok((
        StatusCode::CREATED,
        Json(WeightRecordDto {
            date: record.date,
            weight: record.weight,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProgressResponse>, (StatusCode, String)> {
    let profile = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;
    let history = repo::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;

    let start_weight =
        services::resolve_start_weight(profile.start_weight, &history, profile.current_weight);
    let series = services::chart_series(&history, start_weight, profile.target_weight);
    let percentage = services::goal_percentage(&history, start_weight, profile.target_weight);

    Ok(Json(ProgressResponse {
        start_weight,
        current_weight: profile.current_weight,
        target_weight: profile.target_weight,
        percentage,
        series,
    }))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
