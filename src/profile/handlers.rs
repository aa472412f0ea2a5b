use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    auth::{repo_types::User, AuthUser},
    profile::{dto::UpdateProfileRequest, repo, repo_types::Profile},
    state::AppState,
    weight,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile))
}

/// Load the stored profile, or synthesize the default one so clients can
/// render the onboarding flow before any row exists.
pub async fn load_or_default(
    db: &sqlx::PgPool,
    user_id: uuid::Uuid,
) -> anyhow::Result<Profile> {
    if let Some(profile) = repo::find(db, user_id).await? {
        return Ok(profile);
    }
    let email = User::find_by_id(db, user_id)
        .await?
        .map(|u| u.email)
        .unwrap_or_default();
    Ok(Profile::default_for(user_id, &email))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let profile = load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;
    Ok(Json(profile))
}

/// Full profile save from the profile screen. `start_weight` is never
/// overwritten once set; a changed current weight also appends a weight
/// record dated today so the charts pick it up.
#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let existing = load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;

    let updated = Profile {
        id: user_id,
        name: payload.name,
        blood_type: payload.blood_type,
        rh_factor: payload.rh_factor,
        height: payload.height,
        current_weight: payload.current_weight,
        target_weight: payload.target_weight,
        start_weight: existing.start_weight.or(Some(payload.current_weight)),
        weeks_on_diet: payload.weeks_on_diet,
        diet_duration: existing.diet_duration,
        onboarded: true,
        avatar_url: payload.avatar_url,
        role: existing.role,
    };

    let saved = repo::upsert(&state.db, &updated).await.map_err(|e| {
        error!(error = %e, %user_id, "profile upsert failed");
        internal(e)
    })?;

    if (saved.current_weight - existing.current_weight).abs() > f64::EPSILON {
        let date = weight::services::today_display_date();
        weight::repo::insert(&state.db, user_id, &date, saved.current_weight)
            .await
            .map_err(internal)?;
        info!(%user_id, weight = saved.current_weight, "weight record appended from profile edit");
    }

    Ok(Json(saved))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
