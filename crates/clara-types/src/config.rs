//! Global configuration types for Clara.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! model, sampling defaults, and the startup persona.

use serde::{Deserialize, Serialize};

use crate::persona::Persona;

/// Top-level configuration for the Clara client.
///
/// Loaded from `~/.clara/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Model identifier sent to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Balance between creativity and helpfulness.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Upper bound on generated tokens per reply.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Persona selected at startup when no `--persona` flag is given.
    #[serde(default)]
    pub default_persona: Persona,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2048
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            default_persona: Persona::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.max_output_tokens, 2048);
        assert_eq!(config.default_persona, Persona::Relationship);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.default_persona, Persona::Relationship);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
model = "gemini-2.5-pro"
temperature = 0.4
default_persona = "business"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert!((config.temperature - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.default_persona, Persona::Business);
        // Unset field keeps its default.
        assert_eq!(config.max_output_tokens, 2048);
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.9,
            max_output_tokens: 1024,
            default_persona: Persona::Edc,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_output_tokens, 1024);
        assert_eq!(parsed.default_persona, Persona::Edc);
    }
}
