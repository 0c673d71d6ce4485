//! Shared domain types for Clara.
//!
//! This crate contains the core domain types used across the Clara client:
//! Persona, Transcript entries, LLM request/stream shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod transcript;
