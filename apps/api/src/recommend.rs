//! Endorsements ("recomendações") left for a profile. Append-only on
//! `recommendations.json`.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Recommendation;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendation {
    pub to_id: Option<i64>,
    pub message: Option<String>,
    pub from: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub ok: bool,
    pub recommendation: Recommendation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    pub to_id: Option<i64>,
}

/// POST /recommend
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateRecommendation>,
) -> Result<Json<RecommendResponse>, AppError> {
    let (to_id, message) = match (req.to_id, req.message.as_deref().map(str::trim)) {
        (Some(to_id), Some(message)) if !message.is_empty() => (to_id, message.to_string()),
        _ => {
            return Err(AppError::Validation(
                "toId e message são obrigatórios".to_string(),
            ))
        }
    };

    let now = Utc::now();
    let recommendation = Recommendation {
        id: now.timestamp_millis(),
        to_id,
        message,
        from: req.from.unwrap_or_else(|| "anon".to_string()),
        created_at: now,
    };

    let mut all = state.recommendations.read_all();
    all.push(recommendation.clone());
    state.recommendations.write_all(&all)?;

    Ok(Json(RecommendResponse {
        ok: true,
        recommendation,
    }))
}

/// GET /recommendations?toId=123
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RecommendationsQuery>,
) -> Json<Vec<Recommendation>> {
    let all = state.recommendations.read_all();
    let filtered = match params.to_id {
        Some(to_id) => all.into_iter().filter(|r| r.to_id == to_id).collect(),
        None => all,
    };
    Json(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::temp_state;

    #[tokio::test]
    async fn test_create_defaults_sender_to_anon() {
        let (_dir, state) = temp_state();
        let body = create(
            State(state),
            Json(CreateRecommendation {
                to_id: Some(3),
                message: Some("Excelente colega".to_string()),
                from: None,
            }),
        )
        .await
        .unwrap();
        assert!(body.ok);
        assert_eq!(body.recommendation.from, "anon");
        assert!(body.recommendation.id > 0);
    }

    #[tokio::test]
    async fn test_list_filters_by_recipient() {
        let (_dir, state) = temp_state();
        for (to_id, msg) in [(3, "primeira"), (4, "segunda")] {
            create(
                State(state.clone()),
                Json(CreateRecommendation {
                    to_id: Some(to_id),
                    message: Some(msg.to_string()),
                    from: Some("Maria".to_string()),
                }),
            )
            .await
            .unwrap();
        }
        let listed = list(
            State(state),
            Query(RecommendationsQuery { to_id: Some(4) }),
        )
        .await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].message, "segunda");
    }

    #[tokio::test]
    async fn test_missing_message_is_rejected() {
        let (_dir, state) = temp_state();
        let err = create(
            State(state),
            Json(CreateRecommendation {
                to_id: Some(3),
                message: None,
                from: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
