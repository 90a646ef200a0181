//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs signed with the shared `SECRET_KEY`, carrying
//! `{id, username, exp}` with a fixed 1-hour expiry. Expiry is the only way a
//! token stops working; there is no refresh and no revocation list.

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;

pub mod handlers;

const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub exp: usize,
}

pub fn mint_token(
    id: i64,
    username: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        id,
        username: username.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// The authenticated identity, extracted from `Authorization: Bearer <token>`.
/// Adding this extractor to a handler makes the route require a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Config::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::TokenMissing)?
            .to_str()
            .map_err(|_| AppError::TokenMalformed)?;

        let token = match header.split_once(' ') {
            Some(("Bearer", token)) if !token.is_empty() => token,
            _ => return Err(AppError::TokenMalformed),
        };

        let claims =
            verify_token(token, &config.secret_key).map_err(|_| AppError::TokenInvalid)?;

        Ok(AuthUser {
            id: claims.id,
            username: claims.username,
        })
    }
}
