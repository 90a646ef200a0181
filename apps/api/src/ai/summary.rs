//! Local fallback for `POST /ai/summary`: a heuristic headline, a usable
//! resumo, and up to 5 suggested skills from the area's vocabulary.

use serde::{Deserialize, Serialize};

use crate::ai::ProfileSketch;

const MAX_HEADLINE_CHARS: usize = 60;
const MAX_SUGGESTED_SKILLS: usize = 5;

/// Skills commonly worth adding per area, in suggestion order.
const SUGGESTED_BY_AREA: &[(&str, &[&str])] = &[
    (
        "Desenvolvimento",
        &["TypeScript", "React", "Node.js", "SQL", "Docker", "CI/CD"],
    ),
    (
        "Dados",
        &["SQL", "Power BI", "Python", "PostgreSQL", "MongoDB", "Excel"],
    ),
    (
        "Design",
        &["Figma", "Design System", "Acessibilidade", "UX Writing", "Prototipação"],
    ),
    (
        "Infraestrutura",
        &["AWS", "Docker", "CI/CD", "Kubernetes", "Terraform", "Linux"],
    ),
    (
        "Sistemas",
        &["SQL", "Power BI", "Integrações", "ERP", "Docker"],
    ),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub headline: String,
    pub resumo: String,
    pub skills_sugeridas: Vec<String>,
}

pub fn summarize_profile(sketch: &ProfileSketch) -> ProfileSummary {
    let cargo = sketch.cargo.as_deref().unwrap_or("Profissional").trim();
    let area = sketch.area.as_deref().unwrap_or("tecnologia").trim();

    let headline: String = format!("{cargo} · {area}")
        .chars()
        .take(MAX_HEADLINE_CHARS)
        .collect();

    let resumo = match sketch.resumo.as_deref().map(str::trim) {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => format!("{cargo} com foco em {area}, em evolução contínua de carreira."),
    };

    let vocabulary = SUGGESTED_BY_AREA
        .iter()
        .find(|(name, _)| *name == area)
        .map(|(_, skills)| *skills)
        .unwrap_or(SUGGESTED_BY_AREA[0].1);

    let owned_lower: Vec<String> = sketch
        .habilidades_tecnicas
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let skills_sugeridas: Vec<String> = vocabulary
        .iter()
        .filter(|s| !owned_lower.contains(&s.to_lowercase()))
        .take(MAX_SUGGESTED_SKILLS)
        .map(|s| s.to_string())
        .collect();

    ProfileSummary {
        headline,
        resumo,
        skills_sugeridas,
    }
}
