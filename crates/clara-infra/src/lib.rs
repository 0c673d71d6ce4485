//! Infrastructure implementations for Clara.
//!
//! Concrete pieces behind the clara-core abstractions: the Gemini
//! streaming provider, environment-variable credential resolution, and
//! the `config.toml` loader.

pub mod config;
pub mod llm;
pub mod secret;
