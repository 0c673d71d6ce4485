//! CLI command definitions and dispatch for the `clara` binary.
//!
//! Uses clap derive macros for argument parsing. `clara chat` is the main
//! entry point; the rest are small utility commands.

pub mod chat;
pub mod personas;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use clara_types::persona::Persona;

/// Chat with Clara, a persona-driven AI companion.
#[derive(Parser)]
#[command(name = "clara", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Persona to start with (relationship, business, wellness, edc).
        #[arg(long, short)]
        persona: Option<Persona>,

        /// Override the configured model for this session.
        #[arg(long)]
        model: Option<String>,
    },

    /// List the available personas.
    Personas,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
