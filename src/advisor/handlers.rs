use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use crate::{auth::AuthUser, profile, state::AppState};

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub answer: String,
}

pub fn advice_routes() -> Router<AppState> {
    Router::new().route("/advice", post(get_advice))
}

/// One question in, one answer out. An assistant failure becomes the reply
/// text rather than an HTTP error, so the chat stays usable and nothing
/// else changes.
#[instrument(skip(state, payload))]
pub async fn get_advice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, (StatusCode, String)> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "question must not be empty".into()));
    }

    let profile = profile::handlers::load_or_default(&state.db, user_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let answer = match state
        .advisor
        .diet_advice(profile.blood_type, question)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, %user_id, "diet advice failed");
            format!("Desculpe, ocorreu um erro no assistente: {e}")
        }
    };

    Ok(Json(AdviceResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::repo_types::BloodType;

    #[tokio::test]
    async fn fake_advisor_scopes_answer_to_blood_type() {
        let state = AppState::fake();
        let answer = state
            .advisor
            .diet_advice(BloodType::B, "what should I have for breakfast?")
            .await
            .expect("fake advisor never fails");
        assert!(answer.contains("[B]"));
        assert!(answer.contains("breakfast"));
    }

    #[test]
    fn advice_response_serializes() {
        let json = serde_json::to_string(&AdviceResponse {
            answer: "eat more greens".into(),
        })
        .unwrap();
        assert!(json.contains("eat more greens"));
    }
}
