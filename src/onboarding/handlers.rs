use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    auth::AuthUser,
    onboarding::{
        dto::WizardStateResponse,
        wizard::{ProfileDraft, Wizard},
    },
    profile::{self, repo_types::Profile},
    state::AppState,
    weight,
};

pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/onboarding", get(get_onboarding))
        .route("/onboarding", post(complete_onboarding))
}

#[instrument(skip(state))]
pub async fn get_onboarding(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WizardStateResponse>, (StatusCode, String)> {
    let existing = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;
    let wizard = Wizard::new(&existing);
    Ok(Json(WizardStateResponse {
        step: wizard.step(),
        draft: wizard.draft().clone(),
    }))
}

/// The wizard's completion side effect: persist the draft, anchor
/// `start_weight` to the submitted current weight, and seed the history
/// with a record dated today so the progress chart has its first point.
#[instrument(skip(state, draft))]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<Profile>, (StatusCode, String)> {
    let existing = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(internal)?;

    let name = if draft.name.trim().is_empty() {
        existing.name.clone()
    } else {
        draft.name.clone()
    };

    let profile = Profile {
        id: user_id,
        name,
        blood_type: draft.blood_type,
        rh_factor: draft.rh_factor,
        height: draft.height,
        current_weight: draft.current_weight,
        target_weight: draft.target_weight,
        start_weight: Some(draft.current_weight),
        weeks_on_diet: existing.weeks_on_diet,
        diet_duration: draft.diet_duration,
        onboarded: true,
        avatar_url: existing.avatar_url,
        role: existing.role,
    };

    let saved = profile::repo::upsert(&state.db, &profile)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "onboarding upsert failed");
            internal(e)
        })?;

    let date = weight::services::today_display_date();
    weight::repo::insert(&state.db, user_id, &date, draft.current_weight)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "onboarding seed record failed");
            internal(e)
        })?;

    info!(%user_id, start_weight = draft.current_weight, "onboarding completed");
    Ok(Json(saved))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
