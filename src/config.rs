use std::collections::HashMap;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};

use crate::ai_provider::{AIConfig, AIProvider};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub default_provider: String,
    pub providers: HashMap<String, ProviderConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub default_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lucky")
                .join("engine")
        });

        std::fs::create_dir_all(&data_dir)
            .context("Failed to create data directory")?;

        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path)
                .context("Failed to read config.json")?;

            match serde_json::from_str::<Config>(&config_str) {
                Ok(mut config) => {
                    config.data_dir = data_dir;
                    config.fill_env_keys();
                    return Ok(config);
                }
                Err(e) => {
                    eprintln!("Failed to parse existing config.json: {}", e);
                    eprintln!("Recreating default config...");
                }
            }
        }

        let config = Self::default_config(data_dir);
        config.save()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.data_dir.join("config.json");
        let json_str = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(&config_path, json_str)
            .context("Failed to write config.json")?;
        Ok(())
    }

    fn default_config(data_dir: PathBuf) -> Self {
        let mut providers = HashMap::new();

        providers.insert("gemini".to_string(), ProviderConfig {
            default_model: "gemini-2.5-flash".to_string(),
            host: None,
            api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok(),
        });

        providers.insert("ollama".to_string(), ProviderConfig {
            default_model: "qwen2.5".to_string(),
            host: Some("http://localhost:11434".to_string()),
            api_key: None,
        });

        Config {
            data_dir,
            default_provider: "gemini".to_string(),
            providers,
        }
    }

    /// API keys left empty in the file can still come from the environment.
    fn fill_env_keys(&mut self) {
        if let Some(gemini) = self.providers.get_mut("gemini") {
            if gemini.api_key.as_ref().map_or(true, |key| key.is_empty()) {
                gemini.api_key = std::env::var("GEMINI_API_KEY")
                    .or_else(|_| std::env::var("API_KEY"))
                    .ok();
            }
        }
    }

    pub fn get_provider(&self, provider_name: &str) -> Option<&ProviderConfig> {
        self.providers.get(provider_name)
    }

    /// Resolve a usable remote configuration, or None when remote generation
    /// should not even be attempted (unknown provider, missing credential).
    pub fn get_ai_config(&self, provider: Option<String>, model: Option<String>) -> Option<AIConfig> {
        let provider_name = provider.as_deref().unwrap_or(&self.default_provider);
        let provider_config = self.get_provider(provider_name)?;
        let ai_provider: AIProvider = provider_name.parse().ok()?;

        // Gemini without a key is "no credential configured": local only.
        if matches!(ai_provider, AIProvider::Gemini)
            && provider_config.api_key.as_ref().map_or(true, |k| k.is_empty())
        {
            return None;
        }

        Some(AIConfig {
            provider: ai_provider,
            model: model.unwrap_or_else(|| provider_config.default_model.clone()),
            api_key: provider_config.api_key.clone(),
            base_url: provider_config.host.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default_config(PathBuf::from("/tmp/lucky-test"));
        // Tests must not depend on the ambient environment.
        config.providers.get_mut("gemini").unwrap().api_key = None;
        config
    }

    #[test]
    fn test_unknown_provider_yields_no_remote() {
        let config = test_config();
        assert!(config.get_ai_config(Some("oracle".to_string()), None).is_none());
    }

    #[test]
    fn test_gemini_without_key_yields_no_remote() {
        let config = test_config();
        assert!(config.get_ai_config(Some("gemini".to_string()), None).is_none());
    }

    #[test]
    fn test_gemini_with_key_is_usable() {
        let mut config = test_config();
        config.providers.get_mut("gemini").unwrap().api_key = Some("test-key".to_string());
        let ai = config.get_ai_config(Some("gemini".to_string()), None).unwrap();
        assert_eq!(ai.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = test_config();
        let ai = config.get_ai_config(Some("ollama".to_string()), Some("llama3".to_string()));
        assert_eq!(ai.unwrap().model, "llama3");
    }
}
