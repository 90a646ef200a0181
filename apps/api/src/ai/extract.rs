//! Local fallback for `POST /ai/extract`: pulls skills, soft skills and a
//! likely area out of free text with fixed vocabulary tables.

use serde::{Deserialize, Serialize};

pub const KNOWN_SKILLS: &[&str] = &[
    "React",
    "Next.js",
    "TailwindCSS",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "Express",
    "Python",
    "FastAPI",
    "Django",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Power BI",
    "Figma",
    "Design System",
    "Acessibilidade",
    "AWS",
    "Docker",
    "CI/CD",
];

/// Keyword tables per area, in priority order: the first area with the most
/// hits wins.
pub const AREA_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Desenvolvimento",
        &[
            "front",
            "back",
            "full",
            "api",
            "node",
            "react",
            "typescript",
            "javascript",
            "python",
            "java",
            ".net",
        ],
    ),
    (
        "Dados",
        &[
            "bi",
            "dashboard",
            "power bi",
            "sql",
            "etl",
            "pipelines",
            "modelagem",
            "análise",
            "big data",
        ],
    ),
    (
        "Design",
        &[
            "ux",
            "ui",
            "figma",
            "wireframe",
            "prototip",
            "acessibilidad",
            "design system",
        ],
    ),
    (
        "Infraestrutura",
        &["devops", "aws", "docker", "k8s", "jenkins", "infra", "iac"],
    ),
    (
        "Sistemas",
        &["erp", "protheus", "totvs", "gestão", "integr"],
    ),
];

const SOFT_SKILL_STEMS: &[(&str, &str)] = &[
    ("comunica", "Comunicação"),
    ("lider", "Liderança"),
    ("colabora", "Colaboração"),
    ("resili", "Resiliência"),
    ("criativ", "Criatividade"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub habilidades_tecnicas: Vec<String>,
    pub soft_skills: Vec<String>,
    pub area: Option<String>,
    pub tags: Vec<String>,
}

pub fn extract_from_text(text: &str) -> ExtractedProfile {
    let t = text.to_lowercase();

    let habilidades_tecnicas: Vec<String> = KNOWN_SKILLS
        .iter()
        .filter(|s| t.contains(&s.to_lowercase()))
        .map(|s| s.to_string())
        .collect();

    let mut area = None;
    let mut max_hits = 0;
    for (name, words) in AREA_KEYWORDS {
        let hits = words.iter().filter(|w| t.contains(*w)).count();
        if hits > max_hits {
            max_hits = hits;
            area = Some(name.to_string());
        }
    }

    let soft_skills: Vec<String> = SOFT_SKILL_STEMS
        .iter()
        .filter(|(stem, _)| t.contains(stem))
        .map(|(_, label)| label.to_string())
        .collect();

    let mut tags: Vec<String> = Vec::new();
    for tag in habilidades_tecnicas.iter().chain(soft_skills.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }

    ExtractedProfile {
        habilidades_tecnicas,
        soft_skills,
        area,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skills_match_case_insensitively() {
        let out = extract_from_text("Trabalho com react, node.js e power bi há 3 anos");
        assert_eq!(out.habilidades_tecnicas, vec!["React", "Node.js", "Power BI"]);
    }

    #[test]
    fn test_area_goes_to_most_keyword_hits() {
        let out = extract_from_text("Atuo com sql, etl e dashboards de análise");
        assert_eq!(out.area.as_deref(), Some("Dados"));
    }

    #[test]
    fn test_no_hits_means_no_area() {
        let out = extract_from_text("Gosto de culinária e fotografia");
        assert!(out.area.is_none());
        assert!(out.habilidades_tecnicas.is_empty());
    }

    #[test]
    fn test_soft_skills_match_by_stem() {
        let out = extract_from_text("Boa comunicação, liderança de equipes e resiliência");
        assert_eq!(
            out.soft_skills,
            vec!["Comunicação", "Liderança", "Resiliência"]
        );
    }

    #[test]
    fn test_tags_deduplicate_preserving_order() {
        let out = extract_from_text("React e comunicação. react de novo!");
        assert_eq!(out.tags, vec!["React", "Comunicação"]);
    }
}
