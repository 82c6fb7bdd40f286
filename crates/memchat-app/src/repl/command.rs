//! Input line classification.

/// What one line of REPL input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text for the model.
    Message(String),
    Reset,
    History,
    Memory,
    Help,
    Quit,
}

impl Command {
    /// Classify a line. Only the exact command words below are commands;
    /// any other text, including other `/...` text, is a message passed
    /// through untrimmed. A leading `//` sends the rest with one `/`, so
    /// `//reset` reaches the model as `/reset`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if let Some(escaped) = trimmed.strip_prefix("//") {
            return Command::Message(format!("/{escaped}"));
        }
        let Some(name) = trimmed.strip_prefix('/') else {
            return Command::Message(line.to_string());
        };
        match name.to_ascii_lowercase().as_str() {
            "reset" | "clear" => Command::Reset,
            "history" => Command::History,
            "memory" => Command::Memory,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Message(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /reset     clear conversation memory (alias /clear)
  /history   show the most recent turns
  /memory    show memory size and token usage
  /help      show this help
  /quit      leave (alias /exit)
Anything else is sent to the model. Start a line with // to send
text that would otherwise be a command (//reset sends \"/reset\").";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_message() {
        assert_eq!(
            Command::parse("what is rust?"),
            Command::Message("what is rust?".into())
        );
        assert_eq!(Command::parse(""), Command::Message(String::new()));
        assert_eq!(Command::parse("  spaced "), Command::Message("  spaced ".into()));
    }

    #[test]
    fn commands_and_aliases() {
        assert_eq!(Command::parse("/reset"), Command::Reset);
        assert_eq!(Command::parse("/CLEAR"), Command::Reset);
        assert_eq!(Command::parse(" /history "), Command::History);
        assert_eq!(Command::parse("/memory"), Command::Memory);
        assert_eq!(Command::parse("/?"), Command::Help);
        assert_eq!(Command::parse("/exit"), Command::Quit);
    }

    #[test]
    fn other_slash_text_is_message() {
        assert_eq!(
            Command::parse("/etc/hosts is what?"),
            Command::Message("/etc/hosts is what?".into())
        );
        assert_eq!(Command::parse("/frobnicate"), Command::Message("/frobnicate".into()));
    }

    #[test]
    fn double_slash_escapes_commands() {
        assert_eq!(Command::parse("//reset"), Command::Message("/reset".into()));
        assert_eq!(Command::parse("  //quit now"), Command::Message("/quit now".into()));
    }
}
