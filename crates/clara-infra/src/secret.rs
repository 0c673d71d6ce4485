//! Environment-variable credential resolution.
//!
//! The API key is read from the process environment at session-creation
//! time. Absence is a fatal configuration error: no session can be created
//! and the failure is surfaced to the user as a blocking message.
//!
//! Resolution order: `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.

use secrecy::SecretString;

use clara_types::error::ConfigError;

/// Primary environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fallback variable accepted for compatibility with Google tooling.
pub const FALLBACK_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Resolve the API key from the environment.
///
/// Blank values are treated the same as unset. An env var with invalid
/// Unicode is treated as not found rather than erroring, since credentials
/// must be valid strings.
pub fn resolve_api_key() -> Result<SecretString, ConfigError> {
    for var in [API_KEY_VAR, FALLBACK_KEY_VAR] {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => return Ok(SecretString::from(value)),
            Ok(_) => continue,
            Err(std::env::VarError::NotPresent) => continue,
            Err(std::env::VarError::NotUnicode(_)) => continue,
        }
    }
    Err(ConfigError::MissingApiKey { var: API_KEY_VAR })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, MutexGuard};

    // These tests mutate the same process-wide environment variables, so
    // they serialize on a lock and restore what they touched.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn resolve_prefers_primary_variable() {
        let _guard = lock_env();
        // SAFETY: test-local env mutation, removed before the test ends.
        unsafe {
            std::env::set_var(API_KEY_VAR, "primary-key");
            std::env::set_var(FALLBACK_KEY_VAR, "fallback-key");
        }

        let key = resolve_api_key().unwrap();
        assert_eq!(secrecy::ExposeSecret::expose_secret(&key), "primary-key");

        // SAFETY: removing what this test set.
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var(FALLBACK_KEY_VAR);
        }
    }

    #[test]
    fn resolve_missing_is_config_error() {
        let _guard = lock_env();
        // SAFETY: ensuring a clean slate for this test.
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var(FALLBACK_KEY_VAR);
        }

        let err = resolve_api_key().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingApiKey {
                var: "GEMINI_API_KEY"
            }
        ));
    }

    #[test]
    fn resolve_treats_blank_as_unset() {
        let _guard = lock_env();
        // SAFETY: test-local env mutation, removed before the test ends.
        unsafe {
            std::env::remove_var(FALLBACK_KEY_VAR);
            std::env::set_var(API_KEY_VAR, "   ");
        }

        let result = resolve_api_key();
        assert!(result.is_err());

        // SAFETY: removing what this test set.
        unsafe { std::env::remove_var(API_KEY_VAR) };
    }
}
