//! Slash command parsing and help text for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for persona
//! switching, transcript review, and session management.

use console::style;

use clara_types::persona::Persona;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Switch persona (`None` lists the personas instead).
    Persona(Option<Persona>),
    /// Show the transcript so far.
    History,
    /// Unknown command or bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/persona" | "/mode" => match arg {
            None | Some("") => Some(ChatCommand::Persona(None)),
            Some(name) => match name.parse::<Persona>() {
                Ok(persona) => Some(ChatCommand::Persona(Some(persona))),
                Err(_) => Some(ChatCommand::Unknown(format!("unknown persona '{name}'"))),
            },
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!(
        "  {}  {}",
        style("/persona").cyan(),
        "List personas, or switch with /persona <name>"
    );
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!();
    println!(
        "  {}",
        style("Switching persona starts a fresh session; the transcript stays.").dim()
    );
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

/// Print the persona list shown by a bare `/persona`.
pub fn print_persona_list(current: Persona) {
    println!();
    println!("  {}", style("Personas:").bold());
    println!();
    for persona in Persona::ALL {
        let marker = if persona == current { ">" } else { " " };
        println!(
            "  {} {}  {}",
            style(marker).magenta().bold(),
            style(format!("{persona:<12}")).cyan(),
            style(persona.tagline()).dim()
        );
    }
    println!();
    println!(
        "  {}",
        style("Switch with /persona <name>").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_bare_persona_lists() {
        assert_eq!(parse("/persona"), Some(ChatCommand::Persona(None)));
        assert_eq!(parse("/mode"), Some(ChatCommand::Persona(None)));
        assert_eq!(parse("/persona   "), Some(ChatCommand::Persona(None)));
    }

    #[test]
    fn test_parse_persona_with_name() {
        assert_eq!(
            parse("/persona business"),
            Some(ChatCommand::Persona(Some(Persona::Business)))
        );
        assert_eq!(
            parse("/persona EDC"),
            Some(ChatCommand::Persona(Some(Persona::Edc)))
        );
    }

    #[test]
    fn test_parse_persona_with_bad_name() {
        assert!(matches!(
            parse("/persona gardening"),
            Some(ChatCommand::Unknown(msg)) if msg.contains("gardening")
        ));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
