use thiserror::Error;

use crate::llm::LlmError;

/// Errors that prevent a session from being created.
///
/// Configuration failures are fatal to any send attempt and must be
/// surfaced to the user as a blocking message, never swallowed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set; export it before starting a chat")]
    MissingApiKey { var: &'static str },

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors from a send operation.
///
/// A send failure is recovered locally: the partial in-progress entry is
/// discarded and a human-readable notice is shown. No automatic retry.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message is empty after trimming")]
    EmptyMessage,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_the_variable() {
        let err = ConfigError::MissingApiKey {
            var: "GEMINI_API_KEY",
        };
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_send_error_wraps_llm_error() {
        let err = SendError::from(LlmError::RateLimited);
        assert_eq!(err.to_string(), "rate limited");
    }
}
