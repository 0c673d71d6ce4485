//! Interactive chat loop for the `clara` binary.
//!
//! Streams replies with a thinking spinner, renders markdown with
//! syntax-highlighted code blocks, and handles slash commands for persona
//! switching and transcript review. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
