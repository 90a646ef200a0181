//! The relational variant: users and profiles backed by PostgreSQL instead
//! of JSON files, with the same register/login and profile CRUD semantics.
//! The `api-db` binary serves this router; the AI endpoints exist only in
//! the flat-file variant.

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;

use crate::config::Config;
use crate::routes;

pub mod profiles;
pub mod users;

/// Shared state of the relational variant.
#[derive(Clone)]
pub struct DbState {
    pub db: PgPool,
    pub config: Config,
}

impl FromRef<DbState> for Config {
    fn from_ref(state: &DbState) -> Config {
        state.config.clone()
    }
}

pub fn build_router(state: DbState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_handler))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/profiles", get(profiles::list).post(profiles::create))
        .route(
            "/profiles/:id",
            get(profiles::detail)
                .put(profiles::update)
                .delete(profiles::remove),
        )
        .route("/profiles/:id/recommend", post(profiles::recommend_mock))
        .route("/profiles/:id/message", post(profiles::message_mock))
        .fallback(routes::not_found)
        .with_state(state)
}
