use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::ai::extract::{extract_from_text, ExtractedProfile};
use crate::ai::plan::{build_local_plan, LearningPlan};
use crate::ai::prompts;
use crate::ai::quiz::{bank_for, Question};
use crate::ai::suggest::{rank_profiles, SuggestedProfile, DEFAULT_K};
use crate::ai::summary::{summarize_profile, ProfileSummary};
use crate::ai::ProfileSketch;
use crate::errors::AppError;
use crate::state::AppState;

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub total: usize,
    pub items: Vec<SuggestedProfile>,
}

/// POST /ai/suggest — purely local ranking, never a model call.
pub async fn suggest(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let skills: Vec<String> = req
        .skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Param skills é obrigatório (ex: React,Node.js)".to_string(),
        ));
    }

    let all = state.profiles.read_all();
    let items = rank_profiles(
        &all,
        &skills,
        req.area.as_deref(),
        req.city.as_deref(),
        req.k.unwrap_or(DEFAULT_K),
    );

    Ok(Json(SuggestResponse {
        total: items.len(),
        items,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /ai/extract
pub async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Json<ExtractedProfile> {
    if let Some(llm) = &state.llm {
        match llm
            .complete_json::<ExtractedProfile>(&prompts::extract_prompt(&req.text), 0.3)
            .await
        {
            Ok(extracted) => return Json(extracted),
            Err(e) => warn!("/ai/extract falling back to local tables: {e}"),
        }
    }
    Json(extract_from_text(&req.text))
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub profile: Value,
}

/// POST /ai/summary
pub async fn summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Json<ProfileSummary> {
    if let Some(llm) = &state.llm {
        match llm
            .complete_json::<ProfileSummary>(&prompts::summary_prompt(&pretty(&req.profile)), 0.6)
            .await
        {
            Ok(summary) => return Json(summary),
            Err(e) => warn!("/ai/summary falling back to heuristic: {e}"),
        }
    }
    Json(summarize_profile(&ProfileSketch::from_value(&req.profile)))
}

#[derive(Debug, Default, Deserialize)]
pub struct LearningPlanRequest {
    #[serde(default)]
    pub profile: Value,
    pub objetivo: Option<String>,
    pub area: Option<String>,
}

/// POST /ai/learning-plan
pub async fn learning_plan(
    State(state): State<AppState>,
    Json(req): Json<LearningPlanRequest>,
) -> Json<LearningPlan> {
    let sketch = ProfileSketch::from_value(&req.profile);
    let area = sketch
        .area
        .clone()
        .or_else(|| req.area.clone())
        .unwrap_or_else(|| "Desenvolvimento".to_string());
    let objetivo = req
        .objetivo
        .clone()
        .or_else(|| sketch.cargo.clone())
        .unwrap_or_else(|| "Evoluir na carreira".to_string());

    if let Some(llm) = &state.llm {
        let prompt = prompts::learning_plan_prompt(&pretty(&req.profile), &objetivo, &area);
        match llm.complete_json::<LearningPlan>(&prompt, 0.6).await {
            Ok(plan) if !plan.trilha.is_empty() => return Json(plan),
            Ok(_) => warn!("/ai/learning-plan got an empty trilha, using local plan"),
            Err(e) => warn!("/ai/learning-plan falling back to local plan: {e}"),
        }
    }

    let peers: Vec<_> = state
        .profiles
        .read_all()
        .into_iter()
        .filter(|p| p.area == area)
        .collect();
    Json(build_local_plan(&sketch, &objetivo, &area, &peers))
}

#[derive(Debug, Default, Deserialize)]
pub struct MentorRequest {
    #[serde(default)]
    pub mensagem: String,
    #[serde(default)]
    pub perfil: Value,
    #[serde(default)]
    pub plano: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MentorResponse {
    pub resposta: String,
}

/// POST /ai/mentor
pub async fn mentor(
    State(state): State<AppState>,
    Json(req): Json<MentorRequest>,
) -> Result<Json<MentorResponse>, AppError> {
    let mensagem = req.mensagem.trim();
    if mensagem.is_empty() {
        return Err(AppError::Validation("mensagem é obrigatória".to_string()));
    }

    if let Some(llm) = &state.llm {
        let prompt = prompts::mentor_prompt(&pretty(&req.perfil), &pretty(&req.plano), mensagem);
        match llm.complete(&prompt, 0.7).await {
            Ok(resposta) => {
                return Ok(Json(MentorResponse {
                    resposta: resposta.trim().to_string(),
                }))
            }
            Err(e) => warn!("/ai/mentor falling back to template: {e}"),
        }
    }

    let sketch = ProfileSketch::from_value(&req.perfil);
    let nome = sketch.nome.as_deref().unwrap_or("profissional");
    let area = sketch.area.as_deref().unwrap_or("sua área");
    let resposta = format!(
        "Olá, {nome}! Pelo que vejo, você está focando em {area}. Minha sugestão é transformar \
         sua dúvida em pequenos passos: 1) anote o que você já sabe, 2) escreva o que ainda não \
         está claro, 3) conecte essa lacuna com uma etapa do seu plano de aprendizado (por \
         exemplo, revise a etapa mais básica antes de avançar). Use a trilha como um mapa: volte \
         um passo quando sentir que está travado."
    );
    Ok(Json(MentorResponse { resposta }))
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizBankQuery {
    pub area: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizBankResponse {
    pub area: String,
    pub total: usize,
    pub questoes: Vec<Question>,
}

/// GET /ai/quiz-bank?area=Desenvolvimento
pub async fn quiz_bank(Query(params): Query<QuizBankQuery>) -> Json<QuizBankResponse> {
    let area = params
        .area
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or("Desenvolvimento")
        .to_string();
    let questoes = bank_for(&area);
    Json(QuizBankResponse {
        area,
        total: questoes.len(),
        questoes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::CreateProfile;
    use crate::state::testing::temp_state;
    use serde_json::json;

    fn seed_profile(state: &AppState, id: i64, area: &str, skills: &[&str]) {
        let mut all = state.profiles.read_all();
        all.push(
            CreateProfile {
                nome: format!("Pessoa {id}"),
                cargo: "Dev".to_string(),
                area: Some(area.to_string()),
                habilidades_tecnicas: skills.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
            .into_profile(id),
        );
        state.profiles.write_all(&all).unwrap();
    }

    #[tokio::test]
    async fn test_suggest_requires_skills() {
        let (_dir, state) = temp_state();
        let err = suggest(State(state), Json(SuggestRequest::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_suggest_ranks_seeded_profiles() {
        let (_dir, state) = temp_state();
        seed_profile(&state, 1, "Desenvolvimento", &["React"]);
        seed_profile(&state, 2, "Dados", &["SQL"]);

        let body = suggest(
            State(state),
            Json(SuggestRequest {
                skills: vec!["React".to_string()],
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(body.total, 1);
        assert_eq!(body.items[0].id, 1);
    }

    #[tokio::test]
    async fn test_extract_without_key_uses_local_tables() {
        let (_dir, state) = temp_state();
        let body = extract(
            State(state),
            Json(ExtractRequest {
                text: "Sou dev react com boa comunicação".to_string(),
            }),
        )
        .await;
        assert_eq!(body.habilidades_tecnicas, vec!["React"]);
        assert_eq!(body.soft_skills, vec!["Comunicação"]);
    }

    #[tokio::test]
    async fn test_summary_without_key_never_fails() {
        let (_dir, state) = temp_state();
        let body = summary(
            State(state),
            Json(SummaryRequest {
                profile: json!({"cargo": "Analista de BI", "area": "Dados"}),
            }),
        )
        .await;
        assert!(!body.headline.is_empty());
        assert!(!body.resumo.is_empty());
    }

    #[tokio::test]
    async fn test_learning_plan_without_key_uses_peer_gaps() {
        let (_dir, state) = temp_state();
        seed_profile(&state, 1, "Dados", &["SQL", "Power BI"]);
        seed_profile(&state, 2, "Dados", &["SQL"]);

        let body = learning_plan(
            State(state),
            Json(LearningPlanRequest {
                profile: json!({"area": "Dados", "habilidadesTecnicas": ["Power BI"]}),
                objetivo: Some("Analista de dados".to_string()),
                area: None,
            }),
        )
        .await;

        assert_eq!(body.objetivo, "Analista de dados");
        assert_eq!(body.area_alvo, "Dados");
        // Base track (3 steps) plus the SQL gap step from peers.
        assert_eq!(body.trilha.len(), 4);
        assert!(body.trilha.last().unwrap().titulo.contains("SQL"));
    }

    #[tokio::test]
    async fn test_mentor_requires_a_message() {
        let (_dir, state) = temp_state();
        let err = mentor(State(state), Json(MentorRequest::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_mentor_fallback_addresses_the_profile() {
        let (_dir, state) = temp_state();
        let body = mentor(
            State(state),
            Json(MentorRequest {
                mensagem: "Por onde começo?".to_string(),
                perfil: json!({"nome": "Ana", "area": "Dados"}),
                plano: Value::Null,
            }),
        )
        .await
        .unwrap();
        assert!(body.resposta.contains("Ana"));
        assert!(body.resposta.contains("Dados"));
    }

    #[tokio::test]
    async fn test_quiz_bank_defaults_to_desenvolvimento() {
        let body = quiz_bank(Query(QuizBankQuery::default())).await;
        assert_eq!(body.area, "Desenvolvimento");
        assert_eq!(body.total, body.questoes.len());
        assert!(body.total > 0);
    }
}
