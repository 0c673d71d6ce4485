//! Business logic for Clara.
//!
//! Two collaborating pieces live here: the session manager, which owns the
//! single lazily-created conversation session bound to a persona, and the
//! stream accumulator, which folds streamed text fragments into the
//! in-progress transcript entry. Provider implementations live in
//! clara-infra.

pub mod chat;
pub mod llm;
