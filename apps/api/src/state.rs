use std::path::Path;

use axum::extract::FromRef;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::{Message, Profile, Recommendation, User};
use crate::store::{JsonFile, StoreError};

/// Shared application state for the flat-file variant, injected into route
/// handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: JsonFile<Profile>,
    pub users: JsonFile<User>,
    pub messages: JsonFile<Message>,
    pub recommendations: JsonFile<Recommendation>,
    /// `None` when no external API key is configured; AI endpoints then
    /// answer with their local fallbacks.
    pub llm: Option<LlmClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, llm: Option<LlmClient>) -> Result<Self, StoreError> {
        let data_dir = Path::new(&config.data_dir);
        Ok(AppState {
            profiles: JsonFile::open(data_dir, "profiles.json")?,
            users: JsonFile::open(data_dir, "users.json")?,
            messages: JsonFile::open(data_dir, "messages.json")?,
            recommendations: JsonFile::open(data_dir, "recommendations.json")?,
            llm,
            config,
        })
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Config {
        state.config.clone()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Builds an [`AppState`] over a fresh temp data directory. The returned
    /// guard keeps the directory alive for the duration of the test.
    pub fn temp_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            secret_key: "test-secret".to_string(),
            openai_api_key: None,
            database_url: None,
            data_dir: dir.path().join("data").to_string_lossy().into_owned(),
            uploads_dir: dir.path().join("uploads").to_string_lossy().into_owned(),
            port: 0,
            rust_log: "info".to_string(),
        };
        let state = AppState::new(config, None).unwrap();
        (dir, state)
    }
}
