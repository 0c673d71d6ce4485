//! Session manager for persona-bound chat sessions.
//!
//! Exactly one session is live at any time. A session is created lazily on
//! the first send and replaced wholesale whenever the requested persona
//! differs from the bound one; a send already in flight keeps its old
//! handle until it completes or fails.

use std::sync::Arc;

use uuid::Uuid;

use clara_types::config::GlobalConfig;
use clara_types::error::{ConfigError, SendError};
use clara_types::llm::{GenerationConfig, GenerationRequest, Message};
use clara_types::persona::Persona;

use crate::llm::{EventStream, LlmProvider, ProviderFactory};

/// Sampling and model settings applied to every new session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl From<&GlobalConfig> for SessionSettings {
    fn from(config: &GlobalConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// A conversation session bound to exactly one persona.
///
/// Holds the provider handle, the generation config (whose system
/// instruction embeds the base and persona instructions), and the
/// client-side conversation history carried into each request. Never
/// persisted across process restarts.
pub struct ChatSession {
    id: Uuid,
    persona: Persona,
    config: GenerationConfig,
    provider: Arc<dyn LlmProvider>,
    history: Vec<Message>,
}

impl ChatSession {
    fn new(persona: Persona, config: GenerationConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            id: Uuid::now_v7(),
            persona,
            config,
            provider,
            history: Vec::new(),
        }
    }

    /// Unique identity of this session handle. A persona switch always
    /// yields a session with a fresh id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Conversation history sent with each request.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Request a streamed reply for `text`.
    ///
    /// The text must be non-empty after trimming. The trimmed user message
    /// is recorded in the history before the request is issued; the
    /// assistant reply is recorded by the caller via [`record_reply`]
    /// once the stream completes normally.
    ///
    /// [`record_reply`]: ChatSession::record_reply
    pub fn send(&mut self, text: &str) -> Result<EventStream, SendError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SendError::EmptyMessage);
        }

        self.history.push(Message::user(trimmed));
        let request = GenerationRequest {
            config: self.config.clone(),
            messages: self.history.clone(),
        };

        tracing::debug!(
            session = %self.id,
            persona = %self.persona,
            turns = self.history.len(),
            "requesting streamed reply"
        );
        Ok(self.provider.stream(request))
    }

    /// Record a completed assistant reply into the history.
    ///
    /// Not called when a stream fails: a failed reply leaves no trace in
    /// the history, mirroring its removal from the transcript.
    pub fn record_reply(&mut self, text: impl Into<String>) {
        self.history.push(Message::assistant(text));
    }
}

/// Owns the single live [`ChatSession`] and recreates it on persona change.
pub struct SessionManager<F> {
    factory: F,
    settings: SessionSettings,
    current: Option<ChatSession>,
}

impl<F: ProviderFactory> SessionManager<F> {
    pub fn new(factory: F, settings: SessionSettings) -> Self {
        Self {
            factory,
            settings,
            current: None,
        }
    }

    /// The currently live session, if any.
    pub fn current(&self) -> Option<&ChatSession> {
        self.current.as_ref()
    }

    /// Return the session bound to `persona`, creating or replacing the
    /// live session as needed.
    ///
    /// A missing credential surfaces as a [`ConfigError`] and leaves the
    /// previous session (if any) in place.
    pub fn ensure_session(&mut self, persona: Persona) -> Result<&mut ChatSession, ConfigError> {
        let needs_new = match &self.current {
            Some(session) => session.persona() != persona,
            None => true,
        };

        if needs_new {
            let provider = self.factory.create()?;
            let config = GenerationConfig {
                model: self.settings.model.clone(),
                system_instruction: persona.system_instruction(),
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            };
            tracing::info!(persona = %persona, model = %config.model, "creating chat session");
            self.current = Some(ChatSession::new(persona, config, provider));
        }

        // The branch above guarantees a session is present.
        Ok(self.current.as_mut().expect("session present"))
    }
}
