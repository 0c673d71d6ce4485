//! LlmProvider trait definition.
//!
//! This is the abstraction the session layer talks to. Implementations
//! live in clara-infra (e.g., `GeminiProvider`).

use std::pin::Pin;
use std::sync::Arc;

use futures_util::Stream;

use clara_types::error::ConfigError;
use clara_types::llm::{GenerationRequest, LlmError, StreamEvent};

/// A lazy, single-pass, non-restartable sequence of stream events.
///
/// Terminates normally at end-of-reply (`StreamEvent::Done` or stream
/// closure) or abnormally with an `LlmError` item on transport failure.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + 'static>>;

/// Trait for LLM provider backends.
///
/// `stream` returns a boxed stream, which keeps the trait object-safe so
/// sessions can hold providers behind `Arc<dyn LlmProvider>`.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a streaming generation request. No retry is performed; a
    /// transport failure surfaces as an `Err` item in the stream.
    fn stream(&self, request: GenerationRequest) -> EventStream;
}

/// Constructs a provider at session-creation time.
///
/// Credential resolution happens here: a missing API key is a fatal
/// [`ConfigError`] that prevents the session from being created at all.
pub trait ProviderFactory: Send + Sync {
    fn create(&self) -> Result<Arc<dyn LlmProvider>, ConfigError>;
}
