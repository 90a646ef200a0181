use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::HasId;

/// A candidate's public card record. Field names follow the wire format the
/// SPA consumes (Portuguese, camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub foto: String,
    pub cargo: String,
    #[serde(default)]
    pub resumo: String,
    #[serde(default)]
    pub localizacao: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub habilidades_tecnicas: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub experiencias: Vec<Value>,
    #[serde(default)]
    pub formacao: Vec<Value>,
    #[serde(default)]
    pub projetos: Vec<Value>,
    #[serde(default)]
    pub certificacoes: Vec<Value>,
    #[serde(default)]
    pub idiomas: Vec<Value>,
    #[serde(default)]
    pub areas_interesse: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl HasId for Profile {
    fn id(&self) -> i64 {
        self.id
    }
}

pub const DEFAULT_FOTO: &str = "https://i.pravatar.cc/150";
pub const DEFAULT_AREA: &str = "Desenvolvimento";

/// Body of `POST /profiles`. Only nome and cargo are required; everything
/// else defaults to the empty shape the SPA expects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfile {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub cargo: String,
    pub foto: Option<String>,
    pub resumo: Option<String>,
    pub localizacao: Option<String>,
    pub area: Option<String>,
    #[serde(default)]
    pub habilidades_tecnicas: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub experiencias: Vec<Value>,
    #[serde(default)]
    pub formacao: Vec<Value>,
    #[serde(default)]
    pub projetos: Vec<Value>,
    #[serde(default)]
    pub certificacoes: Vec<Value>,
    #[serde(default)]
    pub idiomas: Vec<Value>,
    #[serde(default)]
    pub areas_interesse: Vec<Value>,
}

impl CreateProfile {
    pub fn into_profile(self, id: i64) -> Profile {
        Profile {
            id,
            nome: self.nome,
            foto: self.foto.unwrap_or_else(|| DEFAULT_FOTO.to_string()),
            cargo: self.cargo,
            resumo: self.resumo.unwrap_or_default(),
            localizacao: self.localizacao.unwrap_or_default(),
            area: self.area.unwrap_or_else(|| DEFAULT_AREA.to_string()),
            habilidades_tecnicas: self.habilidades_tecnicas,
            soft_skills: self.soft_skills,
            experiencias: self.experiencias,
            formacao: self.formacao,
            projetos: self.projetos,
            certificacoes: self.certificacoes,
            idiomas: self.idiomas,
            areas_interesse: self.areas_interesse,
            created_at: Utc::now(),
        }
    }
}

/// Body of `PUT /profiles/:id`. Every field is optional; absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub nome: Option<String>,
    pub foto: Option<String>,
    pub cargo: Option<String>,
    pub resumo: Option<String>,
    pub localizacao: Option<String>,
    pub area: Option<String>,
    pub habilidades_tecnicas: Option<Vec<String>>,
    pub soft_skills: Option<Vec<String>>,
    pub experiencias: Option<Vec<Value>>,
    pub formacao: Option<Vec<Value>>,
    pub projetos: Option<Vec<Value>>,
    pub certificacoes: Option<Vec<Value>>,
    pub idiomas: Option<Vec<Value>>,
    pub areas_interesse: Option<Vec<Value>>,
}

impl UpdateProfile {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(v) = self.nome {
            profile.nome = v;
        }
        if let Some(v) = self.foto {
            profile.foto = v;
        }
        if let Some(v) = self.cargo {
            profile.cargo = v;
        }
        if let Some(v) = self.resumo {
            profile.resumo = v;
        }
        if let Some(v) = self.localizacao {
            profile.localizacao = v;
        }
        if let Some(v) = self.area {
            profile.area = v;
        }
        if let Some(v) = self.habilidades_tecnicas {
            profile.habilidades_tecnicas = v;
        }
        if let Some(v) = self.soft_skills {
            profile.soft_skills = v;
        }
        if let Some(v) = self.experiencias {
            profile.experiencias = v;
        }
        if let Some(v) = self.formacao {
            profile.formacao = v;
        }
        if let Some(v) = self.projetos {
            profile.projetos = v;
        }
        if let Some(v) = self.certificacoes {
            profile.certificacoes = v;
        }
        if let Some(v) = self.idiomas {
            profile.idiomas = v;
        }
        if let Some(v) = self.areas_interesse {
            profile.areas_interesse = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fills_defaults() {
        let p = CreateProfile {
            nome: "Ana".to_string(),
            cargo: "Dev Frontend".to_string(),
            ..Default::default()
        }
        .into_profile(1);
        assert_eq!(p.foto, DEFAULT_FOTO);
        assert_eq!(p.area, DEFAULT_AREA);
        assert!(p.habilidades_tecnicas.is_empty());
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let mut p = CreateProfile {
            nome: "Ana".to_string(),
            cargo: "Dev Frontend".to_string(),
            resumo: Some("resumo original".to_string()),
            ..Default::default()
        }
        .into_profile(1);

        UpdateProfile {
            cargo: Some("Tech Lead".to_string()),
            ..Default::default()
        }
        .apply(&mut p);

        assert_eq!(p.cargo, "Tech Lead");
        assert_eq!(p.nome, "Ana");
        assert_eq!(p.resumo, "resumo original");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let p = CreateProfile {
            nome: "Ana".to_string(),
            cargo: "Dev".to_string(),
            ..Default::default()
        }
        .into_profile(9);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("habilidadesTecnicas").is_some());
        assert!(json.get("softSkills").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("habilidades_tecnicas").is_none());
    }
}
