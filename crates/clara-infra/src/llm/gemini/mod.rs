//! GeminiProvider -- concrete [`LlmProvider`] implementation for the
//! Google Generative Language API.
//!
//! Sends streaming requests to `models/{model}:streamGenerateContent`
//! with the API key in the `x-goog-api-key` header. The key is wrapped in
//! [`secrecy::SecretString`] and never appears in Debug output or logs.

mod streaming;
mod types;

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use clara_core::llm::{EventStream, LlmProvider, ProviderFactory};
use clara_types::error::ConfigError;
use clara_types::llm::GenerationRequest;

use streaming::create_gemini_stream;
use types::GeminiRequest;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini LLM provider.
// No Debug derive: the SecretString field already redacts itself, but
// omitting Debug entirely keeps the whole provider out of logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:streamGenerateContent?alt=sse",
            self.base_url
        )
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn stream(&self, request: GenerationRequest) -> EventStream {
        let url = self.stream_url(&request.config.model);
        let body = GeminiRequest::from_generation_request(&request);
        create_gemini_stream(self.client.clone(), url, body, self.api_key.clone())
    }
}

/// Creates a [`GeminiProvider`] per session, resolving the API key from
/// the environment at creation time.
pub struct GeminiFactory;

impl ProviderFactory for GeminiFactory {
    fn create(&self) -> Result<Arc<dyn LlmProvider>, ConfigError> {
        let api_key = crate::secret::resolve_api_key()?;
        Ok(Arc::new(GeminiProvider::new(api_key)))
    }
}
