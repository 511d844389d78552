//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:s` or `:split` → Split the input
//! - `:c` or `:copy` → Copy the output
//! - `:x` or `:clear` → Clear input and output
//! - `:d` or `:dedupe` → Toggle deduplication
//! - `:t` or `:trim` → Toggle whitespace trimming
//! - `@names.txt` or `@form.pdf` → Load a file and split it
//! - `@@` → Load the clipboard and split it

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Split,
    Copy,
    Clear,
    ToggleDedupe,
    ToggleTrim,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "s" | "split" => Command::Split,
            "c" | "copy" => Command::Copy,
            "x" | "clear" => Command::Clear,
            "d" | "dedupe" => Command::ToggleDedupe,
            "t" | "trim" => Command::ToggleTrim,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        // Unknown command pattern
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Split => AppEvent::Split,
        Command::Copy => AppEvent::Copy,
        Command::Clear => AppEvent::Clear,
        Command::ToggleDedupe => AppEvent::ToggleDedupe,
        Command::ToggleTrim => AppEvent::ToggleTrim,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command(":s"), Command::Split);
        assert_eq!(parse_command(":split"), Command::Split);
        assert_eq!(parse_command(":c"), Command::Copy);
        assert_eq!(parse_command(":clear"), Command::Clear);
        assert_eq!(parse_command(": x "), Command::Clear);
    }

    #[test]
    fn test_parse_toggles() {
        assert_eq!(parse_command(":d"), Command::ToggleDedupe);
        assert_eq!(parse_command(":dedupe"), Command::ToggleDedupe);
        assert_eq!(parse_command(":t"), Command::ToggleTrim);
        assert_eq!(parse_command(":trim"), Command::ToggleTrim);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@names.txt"),
            Command::LoadFile("names.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  form.pdf"),
            Command::LoadFile("form.pdf".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":nope"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event_quit() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_split() {
        assert_eq!(command_to_app_event(Command::Split), AppEvent::Split);
    }

    #[test]
    fn test_command_to_app_event_load_file() {
        let event = command_to_app_event(Command::LoadFile("names.txt".to_string()));
        assert_eq!(event, AppEvent::LoadFile("names.txt".to_string()));
    }

    #[test]
    fn test_command_to_app_event_load_clipboard() {
        let event = command_to_app_event(Command::LoadClipboard);
        assert_eq!(event, AppEvent::LoadClipboard);
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(Command::Unknown("invalid".to_string()));
        assert!(matches!(event, AppEvent::InvalidCommand(_)));
    }
}
