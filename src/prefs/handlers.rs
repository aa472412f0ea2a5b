use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{auth::AuthUser, prefs::repo, state::AppState};

#[derive(Debug, Deserialize)]
pub struct PutPrefRequest {
    pub value: bool,
}

pub fn prefs_routes() -> Router<AppState> {
    Router::new()
        .route("/prefs", get(list_prefs))
        .route("/prefs/:name", put(put_pref))
}

#[instrument(skip(state))]
pub async fn list_prefs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BTreeMap<String, bool>>, (StatusCode, String)> {
    let rows = repo::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(rows.into_iter().collect()))
}

#[instrument(skip(state, payload))]
pub async fn put_pref(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(name): Path<String>,
    Json(payload): Json<PutPrefRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    if name.trim().is_empty() || name.len() > 64 {
        return Err((StatusCode::BAD_REQUEST, "invalid preference name".into()));
    }
    repo::upsert(&state.db, user_id, &name, payload.value)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    info!(%user_id, %name, value = payload.value, "preference saved");
    Ok(StatusCode::NO_CONTENT)
}
