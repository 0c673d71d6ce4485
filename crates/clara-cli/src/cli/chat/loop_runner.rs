//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session creation, welcome
//! banner, greeting, the input loop with streaming replies, slash
//! commands, and persona switching. One send is in flight at a time; the
//! loop only reads input again once the current reply reaches a terminal
//! state.

use std::io::Write;
use std::time::{Duration, Instant};

use console::style;
use tracing::{info, warn};

use clara_core::chat::{FoldStep, SessionManager, SessionSettings, StreamAccumulator, Transcript};
use clara_infra::llm::gemini::GeminiFactory;
use clara_infra::secret::API_KEY_VAR;
use clara_types::config::GlobalConfig;
use clara_types::error::SendError;
use clara_types::persona::Persona;
use clara_types::transcript::Author;

use super::banner::{print_persona_switch, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Shown when a reply stream fails. The partial entry is already gone
/// from the transcript by the time this prints.
const CONNECTION_APOLOGY: &str =
    "I'm having trouble connecting right now. Please check your connection or try again.";

fn thinking_spinner() -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(
    config: &GlobalConfig,
    persona: Persona,
    model_override: Option<String>,
) -> anyhow::Result<()> {
    let mut settings = SessionSettings::from(config);
    if let Some(model) = model_override {
        settings.model = model;
    }
    let model_name = settings.model.clone();

    let mut persona = persona;
    let mut manager = SessionManager::new(GeminiFactory, settings);
    let mut transcript = Transcript::new();
    let mut renderer = ChatRenderer::for_persona(persona);

    // A missing credential is fatal at startup: there is nothing to chat with.
    let session = manager.ensure_session(persona).map_err(|e| {
        anyhow::anyhow!("{e}. Set the {API_KEY_VAR} environment variable and try again.")
    })?;
    let session_id = session.id().to_string();
    info!(session = %session_id, persona = %persona, "chat session started");

    print_welcome_banner(persona, &model_name, &session_id);

    let greeting = persona.greeting();
    println!("  {}", renderer.render_final(&greeting).trim());
    println!();
    transcript.push_assistant(greeting);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                // Slash commands
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Persona(None) => {
                            commands::print_persona_list(persona);
                            continue;
                        }
                        ChatCommand::Persona(Some(requested)) => {
                            if requested == persona {
                                println!(
                                    "\n  {} Already in {requested} mode.\n",
                                    style("~").magenta().bold()
                                );
                                continue;
                            }
                            // A switch replaces the session but keeps the
                            // transcript; a failed switch keeps the old one.
                            match manager.ensure_session(requested) {
                                Ok(session) => {
                                    let new_id = session.id().to_string();
                                    persona = requested;
                                    renderer = ChatRenderer::for_persona(persona);
                                    print_persona_switch(persona, &new_id);

                                    let greeting = persona.greeting();
                                    println!("  {}", renderer.render_final(&greeting).trim());
                                    println!();
                                    transcript.push_assistant(greeting);
                                }
                                Err(e) => {
                                    eprintln!(
                                        "\n  {} Could not switch persona: {e}\n",
                                        style("!").red().bold()
                                    );
                                }
                            }
                            continue;
                        }
                        ChatCommand::History => {
                            println!();
                            for entry in transcript.entries() {
                                let label = match entry.author {
                                    Author::User => style("You").green().bold(),
                                    Author::Assistant => style("Clara").cyan().bold(),
                                };
                                let preview = if entry.text.chars().count() > 100 {
                                    let head: String = entry.text.chars().take(97).collect();
                                    format!("{head}...")
                                } else {
                                    entry.text.clone()
                                };
                                println!(
                                    "  {} {} {}",
                                    style(entry.created_at.format("%H:%M")).dim(),
                                    label,
                                    preview.replace('\n', " ")
                                );
                            }
                            println!();
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Send to the LLM
                let session = match manager.ensure_session(persona) {
                    Ok(session) => session,
                    Err(e) => {
                        eprintln!("\n  {} {e}\n", style("!").red().bold());
                        continue;
                    }
                };

                let stream = match session.send(&text) {
                    Ok(stream) => stream,
                    // Whitespace-only input is rejected silently.
                    Err(SendError::EmptyMessage) => continue,
                    Err(e) => {
                        eprintln!("\n  {} {e}\n", style("!").red().bold());
                        continue;
                    }
                };
                transcript.push_user(text.trim());

                let spinner = thinking_spinner();
                let start_time = Instant::now();

                let mut accumulator = StreamAccumulator::begin(&mut transcript, stream);
                let mut first_fragment_received = false;
                let mut reply: Option<String> = None;
                let mut failure: Option<SendError> = None;

                while let Some(step) = accumulator.step(&mut transcript).await {
                    match step {
                        FoldStep::Delta(fragment) => {
                            if !first_fragment_received {
                                spinner.finish_and_clear();
                                first_fragment_received = true;
                                print!("\n  {} ", style("Clara >").cyan().bold());
                                let _ = std::io::stdout().flush();
                            }
                            renderer.print_fragment(&fragment);
                        }
                        FoldStep::Completed { text, .. } => {
                            reply = Some(text);
                        }
                        FoldStep::Failed { error } => {
                            failure = Some(error);
                        }
                    }
                }
                if !first_fragment_received {
                    spinner.finish_and_clear();
                }

                if let Some(error) = failure {
                    warn!(error = %error, "reply stream failed");
                    eprintln!(
                        "\n  {} {}",
                        style("!").red().bold(),
                        style(CONNECTION_APOLOGY).yellow()
                    );
                    eprintln!(
                        "  {}",
                        style("Type a message to retry, /exit to quit.").dim()
                    );
                    continue;
                }

                if let Some(reply_text) = reply {
                    println!();
                    renderer.print_reply_footer(
                        start_time.elapsed().as_millis() as u64,
                        &model_name,
                    );
                    println!();
                    session.record_reply(reply_text);
                }
            }
        }
    }

    Ok(())
}
