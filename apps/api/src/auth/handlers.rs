use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::mint_token;
use crate::errors::AppError;
use crate::models::user::{PublicUser, User};
use crate::state::AppState;
use crate::store::next_id;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let username = req.username.trim().to_string();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Username e password são obrigatórios".to_string(),
        ));
    }

    let mut users = state.users.read_all();
    if users.iter().any(|u| u.username == username) {
        return Err(AppError::Conflict("Usuário já existe".to_string()));
    }

    let user = User {
        id: next_id(&users),
        username,
        password: req.password,
        created_at: Utc::now(),
    };
    users.push(user.clone());
    state.users.write_all(&users)?;

    info!("registered user '{}' (id={})", user.username, user.id);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Usuário cadastrado com sucesso".to_string(),
            user: PublicUser::from(&user),
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let users = state.users.read_all();
    let user = users
        .iter()
        .find(|u| u.username == req.username)
        .ok_or(AppError::BadCredentials)?;

    // Plain-string comparison, same as storage. See models::user.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_token;
    use crate::state::testing::temp_state;

    fn creds(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login_round_trips_username() {
        let (_dir, state) = temp_state();

        let (status, body) = register(State(state.clone()), Json(creds("ana", "s3nha")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.user.username, "ana");

        let login_body = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "ana".to_string(),
                password: "s3nha".to_string(),
            }),
        )
        .await
        .unwrap();

        let claims = verify_token(&login_body.token, &state.config.secret_key).unwrap();
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.id, body.user.id);
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let (_dir, state) = temp_state();
        register(State(state.clone()), Json(creds("ana", "x")))
            .await
            .unwrap();
        let err = register(State(state), Json(creds("ana", "y")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let (_dir, state) = temp_state();
        let err = register(State(state), Json(creds("", "")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let (_dir, state) = temp_state();
        register(State(state.clone()), Json(creds("ana", "certa")))
            .await
            .unwrap();
        let err = login(
            State(state),
            Json(LoginRequest {
                username: "ana".to_string(),
                password: "errada".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_is_unauthorized() {
        let (_dir, state) = temp_state();
        let err = login(
            State(state),
            Json(LoginRequest {
                username: "ninguem".to_string(),
                password: "x".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadCredentials));
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let (_dir, state) = temp_state();
        let (_, first) = register(State(state.clone()), Json(creds("ana", "x")))
            .await
            .unwrap();
        let (_, second) = register(State(state), Json(creds("bia", "x")))
            .await
            .unwrap();
        assert_eq!(second.user.id, first.user.id + 1);
    }
}
