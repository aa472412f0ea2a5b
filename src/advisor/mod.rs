mod gemini;
pub mod handlers;

pub use gemini::{DietAdvisor, GeminiAdvisor};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::advice_routes())
}
