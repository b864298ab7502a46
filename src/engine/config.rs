use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "EleutherAI/polyglot-ko-1.3b";

/// Settings read once at startup. Without a token every generation call
/// fails with a missing-credential error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    pub fn model_name(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("story-machine");
    path.push("settings.json");
    path
}

fn load_settings_file() -> AppConfig {
    fs::read_to_string(settings_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Environment variables win over the settings file.
pub fn load() -> AppConfig {
    let file = load_settings_file();

    let api_token = std::env::var("HUGGINGFACEHUB_API_TOKEN")
        .ok()
        .filter(|token| !token.is_empty())
        .or(file.api_token);

    let model = std::env::var("HF_MODEL")
        .ok()
        .filter(|model| !model.is_empty())
        .or(file.model);

    AppConfig { api_token, model }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_name_defaults_when_unset() {
        assert_eq!(AppConfig::default().model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn model_name_uses_the_override() {
        let config = AppConfig {
            api_token: None,
            model: Some("some-org/some-model".to_string()),
        };
        assert_eq!(config.model_name(), "some-org/some-model");
    }
}
