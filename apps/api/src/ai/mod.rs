//! "AI" features: the relevance scorer behind suggestions, the proxy
//! endpoints that forward prompts to the completion API, and the local
//! heuristics used when no key is configured or the external call fails.

use serde::Deserialize;
use serde_json::Value;

pub mod extract;
pub mod handlers;
pub mod plan;
pub mod prompts;
pub mod quiz;
pub mod suggest;
pub mod summary;

/// Loose view of the profile object the SPA posts to the AI endpoints. The
/// payload is user-assembled and may be partial, so every field is optional
/// and a malformed object degrades to the empty sketch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSketch {
    pub nome: Option<String>,
    pub cargo: Option<String>,
    pub resumo: Option<String>,
    pub localizacao: Option<String>,
    pub area: Option<String>,
    #[serde(default)]
    pub habilidades_tecnicas: Vec<String>,
}

impl ProfileSketch {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sketch_reads_camel_case_fields() {
        let sketch = ProfileSketch::from_value(&json!({
            "nome": "Ana",
            "area": "Dados",
            "habilidadesTecnicas": ["SQL"]
        }));
        assert_eq!(sketch.nome.as_deref(), Some("Ana"));
        assert_eq!(sketch.habilidades_tecnicas, vec!["SQL"]);
    }

    #[test]
    fn test_malformed_profile_degrades_to_default() {
        let sketch = ProfileSketch::from_value(&json!({"habilidadesTecnicas": "não é lista"}));
        assert!(sketch.nome.is_none());
        assert!(sketch.habilidades_tecnicas.is_empty());
    }
}
