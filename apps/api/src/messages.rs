//! Contact messages left for a profile. Append-only on `messages.json`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Message;
use crate::state::AppState;
use crate::store::next_id;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    pub to_id: Option<i64>,
    pub text: Option<String>,
    pub from_name: Option<String>,
    pub from_contact: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    pub to_id: Option<i64>,
}

/// POST /messages
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMessage>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let (to_id, text) = match (req.to_id, req.text.as_deref().map(str::trim)) {
        (Some(to_id), Some(text)) if !text.is_empty() => (to_id, text.to_string()),
        _ => {
            return Err(AppError::Validation(
                "Campos obrigatórios: toId e text".to_string(),
            ))
        }
    };

    let mut all = state.messages.read_all();
    let message = Message {
        id: next_id(&all),
        to_id,
        text,
        from_name: req.from_name,
        from_contact: req.from_contact,
        created_at: Utc::now(),
    };
    all.push(message.clone());
    state.messages.write_all(&all)?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /messages?toId=123 — all messages, or only one profile's.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MessagesQuery>,
) -> Json<Vec<Message>> {
    let all = state.messages.read_all();
    let filtered = match params.to_id {
        Some(to_id) => all.into_iter().filter(|m| m.to_id == to_id).collect(),
        None => all,
    };
    Json(filtered)
}
