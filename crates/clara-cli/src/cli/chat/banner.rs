//! Welcome banner display for chat sessions.

use console::style;

use clara_types::persona::Persona;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the active persona and its tagline, the model, and a shortened
/// session id, plus a hint about slash commands.
pub fn print_welcome_banner(persona: Persona, model: &str, session_id: &str) {
    println!();
    println!(
        "  {} {}",
        style("Clara").cyan().bold(),
        style(format!("({persona})")).magenta()
    );
    println!("  {}", style(persona.tagline()).dim());
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the short header shown after a persona switch.
pub fn print_persona_switch(persona: Persona, session_id: &str) {
    println!();
    println!(
        "  {} {} {}",
        style("~").magenta().bold(),
        style(format!("Switched to {persona} mode")).bold(),
        style(format!("(session {})", &session_id[..8.min(session_id.len())])).dim()
    );
    println!("  {}", style(persona.tagline()).dim());
    println!();
}
