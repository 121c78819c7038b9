//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unknown AI provider: {0} (expected \"gemini\" or \"fake\")")]
    UnknownProvider(String),
}

/// Which text-generation backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    /// Canned sample recipes; no network.
    Fake,
}

impl ProviderKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "gemini" => Ok(ProviderKind::Gemini),
            "fake" => Ok(ProviderKind::Fake),
            _ => Err(ConfigError::UnknownProvider(value.to_string())),
        }
    }
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: ProviderKind,
    /// API key for the Gemini API. Empty for the fake provider.
    pub api_key: String,
    /// Model name (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required (gemini provider only):
    /// - `API_KEY`: API key for the generative language API
    ///
    /// Optional:
    /// - `LARDER_AI_PROVIDER`: "gemini" (default) or "fake"
    /// - `LARDER_AI_MODEL`: Model name (default: "gemini-2.5-flash")
    /// - `LARDER_AI_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("LARDER_AI_PROVIDER") {
            Some(value) => ProviderKind::parse(&value)?,
            None => ProviderKind::Gemini,
        };

        let api_key = match provider {
            ProviderKind::Gemini => lookup("API_KEY")
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar("API_KEY".to_string()))?,
            ProviderKind::Fake => String::new(),
        };

        let model = lookup("LARDER_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("LARDER_AI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = AiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("API_KEY".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let err = AiConfig::from_lookup(lookup(&[("API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_defaults() {
        let config = AiConfig::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_fake_provider_needs_no_key() {
        let config = AiConfig::from_lookup(lookup(&[("LARDER_AI_PROVIDER", "Fake")])).unwrap();
        assert_eq!(config.provider, ProviderKind::Fake);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = AiConfig::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("LARDER_AI_MODEL", "gemini-2.5-pro"),
            ("LARDER_AI_BASE_URL", "http://localhost:8080/v1beta/"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_unknown_provider() {
        let err = AiConfig::from_lookup(lookup(&[("LARDER_AI_PROVIDER", "openai")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownProvider("openai".to_string()));
    }
}
