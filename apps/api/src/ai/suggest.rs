//! Relevance scorer behind `POST /ai/suggest` — weighted keyword
//! intersection, not a model call.

use serde::{Deserialize, Serialize};

use crate::models::Profile;

pub const DEFAULT_K: usize = 6;

const SKILL_WEIGHT: f32 = 2.0;
const AREA_BONUS: f32 = 1.5;
const CITY_BONUS: f32 = 0.5;

/// One ranked candidate, with the score and the reason it matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedProfile {
    pub id: i64,
    pub nome: String,
    pub foto: String,
    pub cargo: String,
    pub localizacao: String,
    pub area: String,
    pub habilidades_tecnicas: Vec<String>,
    pub score: f32,
    pub motivo: String,
}

struct Scored {
    score: f32,
    matched: Vec<String>,
}

fn score_profile(
    profile: &Profile,
    skills_wanted: &[String],
    area: Option<&str>,
    city: Option<&str>,
) -> Scored {
    let have: Vec<String> = profile
        .habilidades_tecnicas
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matched: Vec<String> = skills_wanted
        .iter()
        .filter(|w| have.contains(&w.to_lowercase()))
        .cloned()
        .collect();

    let mut score = matched.len() as f32 * SKILL_WEIGHT;

    if let Some(area) = area {
        if !area.is_empty() && profile.area.to_lowercase() == area.to_lowercase() {
            score += AREA_BONUS;
        }
    }
    if let Some(city) = city {
        if !city.is_empty() && profile.localizacao.to_lowercase() == city.to_lowercase() {
            score += CITY_BONUS;
        }
    }

    Scored { score, matched }
}

/// Ranks candidates: score descending, ties kept in original array order
/// (stable sort), only positive scores, top `k`.
pub fn rank_profiles(
    all: &[Profile],
    skills_wanted: &[String],
    area: Option<&str>,
    city: Option<&str>,
    k: usize,
) -> Vec<SuggestedProfile> {
    let mut ranked: Vec<(&Profile, Scored)> = all
        .iter()
        .map(|p| (p, score_profile(p, skills_wanted, area, city)))
        .filter(|(_, s)| s.score > 0.0)
        .collect();

    ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
    ranked.truncate(k);

    ranked
        .into_iter()
        .map(|(p, scored)| {
            let mut motivo = format!("Match em: {}", scored.matched.join(", "));
            if area.is_some_and(|a| !a.is_empty()) {
                motivo.push_str(" · área");
            }
            if city.is_some_and(|c| !c.is_empty()) {
                motivo.push_str(" · cidade");
            }
            SuggestedProfile {
                id: p.id,
                nome: p.nome.clone(),
                foto: p.foto.clone(),
                cargo: p.cargo.clone(),
                localizacao: p.localizacao.clone(),
                area: p.area.clone(),
                habilidades_tecnicas: p.habilidades_tecnicas.clone(),
                score: scored.score,
                motivo,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::CreateProfile;

    fn candidate(id: i64, area: &str, city: &str, skills: &[&str]) -> Profile {
        CreateProfile {
            nome: format!("Pessoa {id}"),
            cargo: "Dev".to_string(),
            area: Some(area.to_string()),
            localizacao: Some(city.to_string()),
            habilidades_tecnicas: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
        .into_profile(id)
    }

    fn wanted(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_weights_skills_area_and_city() {
        let all = vec![candidate(
            1,
            "Desenvolvimento",
            "São Paulo - SP",
            &["React", "Node.js"],
        )];
        let ranked = rank_profiles(
            &all,
            &wanted(&["React", "Node.js"]),
            Some("desenvolvimento"),
            Some("são paulo - sp"),
            DEFAULT_K,
        );
        // 2 skills × 2.0 + 1.5 area + 0.5 city
        assert_eq!(ranked[0].score, 6.0);
        assert!(ranked[0].motivo.contains("React, Node.js"));
        assert!(ranked[0].motivo.contains("área"));
        assert!(ranked[0].motivo.contains("cidade"));
    }

    #[test]
    fn test_zero_score_candidates_are_dropped() {
        let all = vec![
            candidate(1, "Dados", "Recife - PE", &["SQL"]),
            candidate(2, "Design", "Recife - PE", &["Figma"]),
        ];
        let ranked = rank_profiles(&all, &wanted(&["SQL"]), None, None, DEFAULT_K);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, 1);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let all = vec![
            candidate(1, "Dados", "", &["SQL"]),
            candidate(2, "Dados", "", &["SQL"]),
            candidate(3, "Dados", "", &["SQL"]),
        ];
        let ranked = rank_profiles(&all, &wanted(&["SQL"]), None, None, DEFAULT_K);
        assert_eq!(ranked.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_top_k_is_honored() {
        let all: Vec<Profile> = (1..=10)
            .map(|id| candidate(id, "Dados", "", &["SQL"]))
            .collect();
        assert_eq!(rank_profiles(&all, &wanted(&["SQL"]), None, None, 4).len(), 4);
    }

    #[test]
    fn test_adding_a_matching_skill_is_monotonic() {
        let plain = candidate(1, "Dados", "", &["SQL"]);
        let richer = candidate(2, "Dados", "", &["SQL", "Power BI"]);
        let all = vec![plain, richer];
        let ranked = rank_profiles(&all, &wanted(&["SQL", "Power BI"]), None, None, DEFAULT_K);
        // The candidate with the extra matching skill ranks first and scores
        // strictly higher.
        assert_eq!(ranked[0].id, 2);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let all = vec![candidate(1, "Dados", "", &["PostgreSQL"])];
        let ranked = rank_profiles(&all, &wanted(&["postgresql"]), None, None, DEFAULT_K);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 2.0);
    }
}
