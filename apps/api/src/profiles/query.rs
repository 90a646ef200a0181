//! The profile search/filter pipeline.
//!
//! Filtering happens over the full in-memory array after loading the whole
//! file; pagination is an array slice of the filtered set.

use serde::Deserialize;

use crate::models::Profile;

pub const DEFAULT_PAGE_SIZE: usize = 60;

/// Query string of `GET /profiles`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProfilesQuery {
    pub q: Option<String>,
    pub area: Option<String>,
    pub localizacao: Option<String>,
    pub skill: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Normalized filter set. Empty-string parameters count as absent, matching
/// how the SPA builds query strings.
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    pub q: Option<String>,
    pub area: Option<String>,
    pub localizacao: Option<String>,
    pub skill: Option<String>,
}

impl ProfileFilter {
    pub fn from_query(query: &ListProfilesQuery) -> Self {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }
        ProfileFilter {
            q: non_empty(&query.q),
            area: non_empty(&query.area),
            localizacao: non_empty(&query.localizacao),
            skill: non_empty(&query.skill),
        }
    }

    fn matches(&self, profile: &Profile) -> bool {
        if let Some(q) = &self.q {
            let q = q.to_lowercase();
            let hit = profile.nome.to_lowercase().contains(&q)
                || profile.cargo.to_lowercase().contains(&q)
                || profile.resumo.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        if let Some(area) = &self.area {
            if profile.area != *area {
                return false;
            }
        }
        if let Some(localizacao) = &self.localizacao {
            if profile.localizacao != *localizacao {
                return false;
            }
        }
        if let Some(skill) = &self.skill {
            let skill = skill.to_lowercase();
            let has = profile
                .habilidades_tecnicas
                .iter()
                .any(|s| s.to_lowercase() == skill);
            if !has {
                return false;
            }
        }
        true
    }
}

pub fn filter_profiles<'a>(all: &'a [Profile], filter: &ProfileFilter) -> Vec<&'a Profile> {
    all.iter().filter(|p| filter.matches(p)).collect()
}

/// Slices one page out of the filtered set. Page numbers are 1-based and
/// floor-clamped; a page past the end is simply empty.
pub fn paginate(filtered: &[&Profile], page: usize, page_size: usize) -> Vec<Profile> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    filtered
        .iter()
        .skip(start)
        .take(page_size)
        .map(|p| (*p).clone())
        .collect()
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::CreateProfile;

    fn profile(id: i64, nome: &str, cargo: &str, area: &str, skills: &[&str]) -> Profile {
        CreateProfile {
            nome: nome.to_string(),
            cargo: cargo.to_string(),
            area: Some(area.to_string()),
            localizacao: Some("São Paulo - SP".to_string()),
            habilidades_tecnicas: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
        .into_profile(id)
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile(1, "Ana Lima", "Dev Frontend", "Desenvolvimento", &["React", "JavaScript"]),
            profile(2, "Bruno Souza", "Analista de BI", "Dados", &["SQL", "Power BI"]),
            profile(3, "Carla Dias", "Dev Backend", "Desenvolvimento", &["Node.js", "SQL"]),
        ]
    }

    #[test]
    fn test_free_text_search_is_case_insensitive_substring() {
        let all = sample();
        let filter = ProfileFilter {
            q: Some("dev".to_string()),
            ..Default::default()
        };
        let hits = filter_profiles(&all, &filter);
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_area_filter_is_exact() {
        let all = sample();
        let filter = ProfileFilter {
            area: Some("Dados".to_string()),
            ..Default::default()
        };
        let hits = filter_profiles(&all, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_skill_filter_matches_whole_tokens_only() {
        let all = sample();
        let filter = ProfileFilter {
            skill: Some("sql".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_profiles(&all, &filter).len(), 2);

        // "Java" must not match "JavaScript".
        let filter = ProfileFilter {
            skill: Some("Java".to_string()),
            ..Default::default()
        };
        assert!(filter_profiles(&all, &filter).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let all = sample();
        let filter = ProfileFilter {
            q: Some("dev".to_string()),
            skill: Some("SQL".to_string()),
            ..Default::default()
        };
        let hits = filter_profiles(&all, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn test_empty_string_params_are_ignored() {
        let query = ListProfilesQuery {
            q: Some("".to_string()),
            area: Some("  ".to_string()),
            ..Default::default()
        };
        let filter = ProfileFilter::from_query(&query);
        assert!(filter.q.is_none());
        assert!(filter.area.is_none());
    }

    #[test]
    fn test_pagination_returns_min_of_page_size_and_total() {
        let all = sample();
        let filter = ProfileFilter::default();
        let filtered = filter_profiles(&all, &filter);
        assert_eq!(paginate(&filtered, 1, 2).len(), 2);
        assert_eq!(paginate(&filtered, 1, 10).len(), 3);
        assert_eq!(paginate(&filtered, 2, 2).len(), 1);
        assert!(paginate(&filtered, 3, 2).is_empty());
    }

    #[test]
    fn test_page_zero_is_clamped_to_first_page() {
        let all = sample();
        let filtered = filter_profiles(&all, &ProfileFilter::default());
        assert_eq!(paginate(&filtered, 0, 2).len(), 2);
    }

    #[test]
    fn test_total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(0, 60), 1);
        assert_eq!(total_pages(3, 2), 2);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(5, 2), 3);
    }
}
