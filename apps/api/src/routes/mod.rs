pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::ai::handlers as ai;
use crate::auth::handlers as auth;
use crate::errors::AppError;
use crate::messages;
use crate::profiles::handlers as profiles;
use crate::recommend;
use crate::state::AppState;

/// JSON 404 for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Rota não encontrada".to_string())
}

pub fn build_router(state: AppState) -> Router {
    // The SPA falls back to reading raw JSON from /data, and photos are
    // served straight from the uploads directory.
    let data_dir = ServeDir::new(state.config.data_dir.clone());
    let uploads_dir = ServeDir::new(state.config.uploads_dir.clone());

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Profiles
        .route("/profiles", get(profiles::list).post(profiles::create))
        .route("/profiles/__debug", get(profiles::debug_info))
        .route(
            "/profiles/:id",
            get(profiles::detail)
                .put(profiles::update)
                .delete(profiles::remove),
        )
        // Recommendations and messages
        .route("/recommend", post(recommend::create))
        .route("/recommendations", get(recommend::list))
        .route("/messages", post(messages::create).get(messages::list))
        // AI proxy + heuristics
        .route("/ai/suggest", post(ai::suggest))
        .route("/ai/extract", post(ai::extract))
        .route("/ai/summary", post(ai::summary))
        .route("/ai/learning-plan", post(ai::learning_plan))
        .route("/ai/mentor", post(ai::mentor))
        .route("/ai/quiz-bank", get(ai::quiz_bank))
        // Static fallback data for the SPA
        .nest_service("/data", data_dir)
        .nest_service("/uploads", uploads_dir)
        .fallback(not_found)
        .with_state(state)
}
