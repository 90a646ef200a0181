use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::info;

use crate::auth::handlers::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::auth::mint_token;
use crate::errors::AppError;
use crate::models::user::PublicUser;
use crate::relational::DbState;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

/// POST /register
pub async fn register(
    State(state): State<DbState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let username = req.username.trim().to_string();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Username e password são obrigatórios".to_string(),
        ));
    }

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(&state.db)
        .await?;
    if exists.is_some() {
        return Err(AppError::Conflict("Usuário já existe".to_string()));
    }

    // Stored as-is; see the note on models::user.
    let row: UserRow = sqlx::query_as(
        "INSERT INTO users (username, password) VALUES ($1, $2) \
         RETURNING id, username, password, created_at",
    )
    .bind(&username)
    .bind(&req.password)
    .fetch_one(&state.db)
    .await?;

    info!("registered user '{}' (id={})", row.username, row.id);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Usuário cadastrado com sucesso".to_string(),
            user: PublicUser {
                id: row.id,
                username: row.username,
            },
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<DbState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let row: Option<UserRow> = sqlx::query_as(
        "SELECT id, username, password, created_at FROM users WHERE username = $1",
    )
    .bind(&req.username)
    .fetch_optional(&state.db)
    .await?;

    let user = row.ok_or(AppError::BadCredentials)?;
    if user.password != req.password {
        return Err(AppError::BadCredentials);
    }

    let token = mint_token(user.id, &user.username, &state.config.secret_key)
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(LoginResponse {
        message: "Login bem-sucedido".to_string(),
        token,
    }))
}
