//! LLM provider abstraction.

pub mod provider;

pub use provider::{EventStream, LlmProvider, ProviderFactory};
