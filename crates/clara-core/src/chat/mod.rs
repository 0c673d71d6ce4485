//! Chat session lifecycle and streaming accumulation.

pub mod accumulator;
pub mod session;
pub mod transcript;

pub use accumulator::{FoldStep, SendPhase, StreamAccumulator};
pub use session::{ChatSession, SessionManager, SessionSettings};
pub use transcript::Transcript;
