use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::types::Json as SqlJson;
use sqlx::{FromRow, Postgres, QueryBuilder};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::{CreateProfile, UpdateProfile, DEFAULT_AREA, DEFAULT_FOTO};
use crate::models::Profile;
use crate::profiles::handlers::ProfilePage;
use crate::profiles::query::{total_pages, ListProfilesQuery};
use crate::relational::DbState;

pub const RELATIONAL_PAGE_SIZE: usize = 12;

const SELECT_COLS: &str = "id, nome, foto, cargo, resumo, localizacao, area, \
     habilidades_tecnicas, soft_skills, experiencias, formacao, projetos, certificacoes, \
     idiomas, areas_interesse, created_at";

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    nome: String,
    foto: String,
    cargo: String,
    resumo: String,
    localizacao: String,
    area: String,
    habilidades_tecnicas: SqlJson<Vec<String>>,
    soft_skills: SqlJson<Vec<String>>,
    experiencias: SqlJson<Vec<Value>>,
    formacao: SqlJson<Vec<Value>>,
    projetos: SqlJson<Vec<Value>>,
    certificacoes: SqlJson<Vec<Value>>,
    idiomas: SqlJson<Vec<Value>>,
    areas_interesse: SqlJson<Vec<Value>>,
    created_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            nome: row.nome,
            foto: row.foto,
            cargo: row.cargo,
            resumo: row.resumo,
            localizacao: row.localizacao,
            area: row.area,
            habilidades_tecnicas: row.habilidades_tecnicas.0,
            soft_skills: row.soft_skills.0,
            experiencias: row.experiencias.0,
            formacao: row.formacao.0,
            projetos: row.projetos.0,
            certificacoes: row.certificacoes.0,
            idiomas: row.idiomas.0,
            areas_interesse: row.areas_interesse.0,
            created_at: row.created_at,
        }
    }
}

/// Pushes the WHERE clause shared by the count and items queries. The skill
/// filter uses JSONB containment: the query must match a stored skill token
/// exactly, not as a substring.
fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, params: &ListProfilesQuery) {
    qb.push(" WHERE 1 = 1");
    if let Some(area) = params.area.as_deref().filter(|s| !s.trim().is_empty()) {
        qb.push(" AND area = ").push_bind(area.to_string());
    }
    if let Some(loc) = params
        .localizacao
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        qb.push(" AND localizacao = ").push_bind(loc.to_string());
    }
    if let Some(q) = params.q.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{q}%");
        qb.push(" AND (nome ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR cargo ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR resumo ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(skill) = params.skill.as_deref().filter(|s| !s.trim().is_empty()) {
        qb.push(" AND habilidades_tecnicas @> ")
            .push_bind(SqlJson(vec![skill.to_string()]));
    }
}

/// GET /profiles?q&area&localizacao&skill&page&pageSize
pub async fn list(
    State(state): State<DbState>,
    Query(params): Query<ListProfilesQuery>,
) -> Result<Json<ProfilePage>, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(RELATIONAL_PAGE_SIZE).max(1);

    let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM profiles");
    push_filters(&mut count_qb, &params);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(&state.db)
        .await?;

    let mut items_qb = QueryBuilder::new(format!("SELECT {SELECT_COLS} FROM profiles"));
    push_filters(&mut items_qb, &params);
    items_qb
        .push(" ORDER BY created_at DESC LIMIT ")
        .push_bind(page_size as i64)
        .push(" OFFSET ")
        .push_bind(((page - 1) * page_size) as i64);
    let rows: Vec<ProfileRow> = items_qb.build_query_as().fetch_all(&state.db).await?;

    let total = total as usize;
    Ok(Json(ProfilePage {
        page,
        page_size,
        total,
        total_pages: total_pages(total, page_size),
        items: rows.into_iter().map(Profile::from).collect(),
    }))
}

/// GET /profiles/:id
pub async fn detail(
    State(state): State<DbState>,
    Path(id): Path<i64>,
) -> Result<Json<Profile>, AppError> {
    fetch_profile(&state, id).await.map(Json)
}

async fn fetch_profile(state: &DbState, id: i64) -> Result<Profile, AppError> {
    let row: Option<ProfileRow> =
        sqlx::query_as(&format!("SELECT {SELECT_COLS} FROM profiles WHERE id = $1"))
            .bind(id)
            .fetch_optional(&state.db)
            .await?;
    row.map(Profile::from)
        .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))
}

/// POST /profiles — requires auth in this variant; the card is bound to its
/// creator via owner_id.
pub async fn create(
    State(state): State<DbState>,
    user: AuthUser,
    Json(req): Json<CreateProfile>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    if req.nome.trim().is_empty() {
        return Err(AppError::Validation("Campo obrigatório: nome".to_string()));
    }
    if req.cargo.trim().is_empty() {
        return Err(AppError::Validation("Campo obrigatório: cargo".to_string()));
    }

    let row: ProfileRow = sqlx::query_as(&format!(
        "INSERT INTO profiles \
         (nome, foto, cargo, resumo, localizacao, area, habilidades_tecnicas, soft_skills, \
          experiencias, formacao, projetos, certificacoes, idiomas, areas_interesse, owner_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
         RETURNING {SELECT_COLS}"
    ))
    .bind(&req.nome)
    .bind(req.foto.as_deref().unwrap_or(DEFAULT_FOTO))
    .bind(&req.cargo)
    .bind(req.resumo.as_deref().unwrap_or(""))
    .bind(req.localizacao.as_deref().unwrap_or(""))
    .bind(req.area.as_deref().unwrap_or(DEFAULT_AREA))
    .bind(SqlJson(req.habilidades_tecnicas.clone()))
    .bind(SqlJson(req.soft_skills.clone()))
    .bind(SqlJson(req.experiencias.clone()))
    .bind(SqlJson(req.formacao.clone()))
    .bind(SqlJson(req.projetos.clone()))
    .bind(SqlJson(req.certificacoes.clone()))
    .bind(SqlJson(req.idiomas.clone()))
    .bind(SqlJson(req.areas_interesse.clone()))
    .bind(user.id)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// PUT /profiles/:id — read, merge, write back in full.
pub async fn update(
    State(state): State<DbState>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProfile>,
) -> Result<Json<Profile>, AppError> {
    let mut profile = fetch_profile(&state, id).await?;
    req.apply(&mut profile);

    let row: ProfileRow = sqlx::query_as(&format!(
        "UPDATE profiles SET \
         nome = $1, foto = $2, cargo = $3, resumo = $4, localizacao = $5, area = $6, \
         habilidades_tecnicas = $7, soft_skills = $8, experiencias = $9, formacao = $10, \
         projetos = $11, certificacoes = $12, idiomas = $13, areas_interesse = $14 \
         WHERE id = $15 RETURNING {SELECT_COLS}"
    ))
    .bind(&profile.nome)
    .bind(&profile.foto)
    .bind(&profile.cargo)
    .bind(&profile.resumo)
    .bind(&profile.localizacao)
    .bind(&profile.area)
    .bind(SqlJson(profile.habilidades_tecnicas.clone()))
    .bind(SqlJson(profile.soft_skills.clone()))
    .bind(SqlJson(profile.experiencias.clone()))
    .bind(SqlJson(profile.formacao.clone()))
    .bind(SqlJson(profile.projetos.clone()))
    .bind(SqlJson(profile.certificacoes.clone()))
    .bind(SqlJson(profile.idiomas.clone()))
    .bind(SqlJson(profile.areas_interesse.clone()))
    .bind(id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row.into()))
}

/// DELETE /profiles/:id
pub async fn remove(
    State(state): State<DbState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Perfil não encontrado".to_string()));
    }
    info!("profile {id} deleted by '{}'", user.username);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendBody {
    pub message: Option<String>,
}

/// POST /profiles/:id/recommend — logged mock, no table behind it.
pub async fn recommend_mock(
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<RecommendBody>,
) -> Json<Value> {
    info!(
        "[RECOMMEND] user={} -> profile={id} msg=\"{}\"",
        user.username,
        req.message.as_deref().unwrap_or("")
    );
    Json(json!({ "ok": true, "message": "Recomendação registrada (mock)" }))
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// POST /profiles/:id/message — logged mock, no table behind it.
pub async fn message_mock(
    user: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<MessageBody>,
) -> Result<Json<Value>, AppError> {
    let (subject, body) = match (req.subject.as_deref(), req.body.as_deref()) {
        (Some(s), Some(b)) if !s.is_empty() && !b.is_empty() => (s, b),
        _ => {
            return Err(AppError::Validation(
                "subject e body são obrigatórios".to_string(),
            ))
        }
    };
    info!(
        "[MESSAGE] from={} toProfile={id} subject=\"{subject}\" body=\"{body}\"",
        user.username
    );
    Ok(Json(json!({ "ok": true, "message": "Mensagem enviada (mock)" })))
}
