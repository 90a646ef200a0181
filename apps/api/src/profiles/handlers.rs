use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::{CreateProfile, UpdateProfile};
use crate::models::Profile;
use crate::profiles::query::{
    filter_profiles, paginate, total_pages, ListProfilesQuery, ProfileFilter, DEFAULT_PAGE_SIZE,
};
use crate::state::AppState;
use crate::store::next_id;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<Profile>,
}

/// GET /profiles?q&area&localizacao&skill&page&pageSize
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProfilesQuery>,
) -> Json<ProfilePage> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let all = state.profiles.read_all();
    let filter = ProfileFilter::from_query(&params);
    let filtered = filter_profiles(&all, &filter);
    let total = filtered.len();
    let items = paginate(&filtered, page, page_size);

    Json(ProfilePage {
        page,
        page_size,
        total,
        total_pages: total_pages(total, page_size),
        items,
    })
}

/// GET /profiles/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Profile>, AppError> {
    state
        .profiles
        .read_all()
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))
}

/// POST /profiles — new cards always append at the end of the file.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateProfile>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    if req.nome.trim().is_empty() {
        return Err(AppError::Validation("Campo obrigatório: nome".to_string()));
    }
    if req.cargo.trim().is_empty() {
        return Err(AppError::Validation("Campo obrigatório: cargo".to_string()));
    }

    let mut all = state.profiles.read_all();
    let profile = req.into_profile(next_id(&all));
    all.push(profile.clone());
    state.profiles.write_all(&all)?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /profiles/:id
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProfile>,
) -> Result<Json<Profile>, AppError> {
    let mut all = state.profiles.read_all();
    let profile = all
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))?;

    req.apply(profile);
    let updated = profile.clone();
    state.profiles.write_all(&all)?;

    Ok(Json(updated))
}

/// DELETE /profiles/:id
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut all = state.profiles.read_all();
    let before = all.len();
    all.retain(|p| p.id != id);
    if all.len() == before {
        return Err(AppError::NotFound("Perfil não encontrado".to_string()));
    }
    state.profiles.write_all(&all)?;

    info!("profile {id} deleted by '{}'", user.username);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDebugInfo {
    pub file_path: String,
    pub count: usize,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
}

/// GET /profiles/__debug — quick store diagnostics for local setups.
pub async fn debug_info(State(state): State<AppState>) -> Json<StoreDebugInfo> {
    let all = state.profiles.read_all();
    Json(StoreDebugInfo {
        file_path: state.profiles.path().display().to_string(),
        count: all.len(),
        first_id: all.first().map(|p| p.id),
        last_id: all.last().map(|p| p.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::temp_state;

    fn new_profile(nome: &str, cargo: &str) -> CreateProfile {
        CreateProfile {
            nome: nome.to_string(),
            cargo: cargo.to_string(),
            resumo: Some("Profissional em transição".to_string()),
            localizacao: Some("Recife - PE".to_string()),
            area: Some("Dados".to_string()),
            habilidades_tecnicas: vec!["SQL".to_string(), "Power BI".to_string()],
            ..Default::default()
        }
    }

    fn tester() -> AuthUser {
        AuthUser {
            id: 1,
            username: "ana".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trips_all_fields() {
        let (_dir, state) = temp_state();
        let (status, created) = create(State(state.clone()), Json(new_profile("Bia", "Analista")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let fetched = detail(State(state), Path(created.id)).await.unwrap();
        assert_eq!(fetched.nome, "Bia");
        assert_eq!(fetched.cargo, "Analista");
        assert_eq!(fetched.resumo, "Profissional em transição");
        assert_eq!(fetched.localizacao, "Recife - PE");
        assert_eq!(fetched.area, "Dados");
        assert_eq!(fetched.habilidades_tecnicas, vec!["SQL", "Power BI"]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (_dir, state) = temp_state();
        let err = detail(State(state), Path(999)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_required_fields_are_rejected() {
        let (_dir, state) = temp_state();
        let err = create(State(state), Json(CreateProfile::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_paginates_with_correct_total() {
        let (_dir, state) = temp_state();
        for i in 0..5 {
            create(
                State(state.clone()),
                Json(new_profile(&format!("Pessoa {i}"), "Analista")),
            )
            .await
            .unwrap();
        }

        let page = list(
            State(state),
            Query(ListProfilesQuery {
                page: Some(2),
                page_size: Some(2),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].nome, "Pessoa 2");
    }

    #[tokio::test]
    async fn test_update_changes_only_sent_fields() {
        let (_dir, state) = temp_state();
        let (_, created) = create(State(state.clone()), Json(new_profile("Bia", "Analista")))
            .await
            .unwrap();

        let updated = update(
            State(state),
            tester(),
            Path(created.id),
            Json(UpdateProfile {
                cargo: Some("Engenheira de Dados".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(updated.cargo, "Engenheira de Dados");
        assert_eq!(updated.nome, "Bia");
    }

    #[tokio::test]
    async fn test_delete_removes_the_profile() {
        let (_dir, state) = temp_state();
        let (_, created) = create(State(state.clone()), Json(new_profile("Bia", "Analista")))
            .await
            .unwrap();

        let status = remove(State(state.clone()), tester(), Path(created.id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = detail(State(state), Path(created.id)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
