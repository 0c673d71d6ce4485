//! Global configuration loader for Clara.
//!
//! Reads `config.toml` from the data directory (`~/.clara/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use clara_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Resolve the data directory.
///
/// Priority:
/// 1. `CLARA_DATA_DIR` environment variable
/// 2. `~/.clara`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CLARA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".clara");
    }

    // Last resort: current directory
    PathBuf::from(".clara")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clara_types::persona::Persona;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.default_persona, Persona::Relationship);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
model = "gemini-2.5-pro"
temperature = 0.4
max_output_tokens = 4096
default_persona = "business"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-2.5-pro");
        assert!((config.temperature - 0.4).abs() < 1e-9);
        assert_eq!(config.max_output_tokens, 4096);
        assert_eq!(config.default_persona, Persona::Business);
    }

    #[tokio::test]
    async fn load_global_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), r#"default_persona = "edc""#)
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.default_persona, Persona::Edc);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.7).abs() < 1e-9);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gemini-2.5-flash");
    }
}
