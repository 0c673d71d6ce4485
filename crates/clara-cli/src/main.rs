//! Clara CLI entry point.
//!
//! Binary name: `clara`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the chat
//! loop or one of the utility commands.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "clara", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = clara_infra::config::resolve_data_dir();
    let config = clara_infra::config::load_global_config(&data_dir).await;

    match cli.command {
        Commands::Chat { persona, model } => {
            let persona = persona.unwrap_or(config.default_persona);
            cli::chat::loop_runner::run_chat_loop(&config, persona, model).await?;
        }

        Commands::Personas => {
            cli::personas::list_personas(&config, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
