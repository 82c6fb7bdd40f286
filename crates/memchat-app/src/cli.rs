use std::path::PathBuf;

use clap::Parser;

/// memchat: a terminal chat with short-term conversation memory.
#[derive(Parser, Debug)]
#[command(name = "memchat", version, about)]
pub struct ChatArgs {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model id override (e.g. gemini-1.5-pro).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Number of prior turns replayed into each prompt.
    #[arg(long)]
    pub context_turns: Option<usize>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// List the Gemini models available to the configured API key.
#[derive(Parser, Debug)]
#[command(name = "list-models", version, about)]
pub struct ListArgs {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only list models supporting this generation method (e.g. generateContent).
    #[arg(long)]
    pub method: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_args_default_to_none() {
        let args = ChatArgs::parse_from(["memchat"]);
        assert!(args.config.is_none());
        assert!(args.model.is_none());
        assert!(args.context_turns.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn chat_args_overrides() {
        let args = ChatArgs::parse_from([
            "memchat",
            "--config",
            "/tmp/memchat.toml",
            "-m",
            "gemini-1.5-pro",
            "--context-turns",
            "10",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/memchat.toml")));
        assert_eq!(args.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(args.context_turns, Some(10));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn list_args_take_no_required_flags() {
        let args = ListArgs::parse_from(["list-models"]);
        assert!(args.config.is_none());
        assert!(args.method.is_none());
    }

    #[test]
    fn list_args_method_filter() {
        let args = ListArgs::parse_from(["list-models", "--method", "generateContent"]);
        assert_eq!(args.method.as_deref(), Some("generateContent"));
    }

    #[test]
    fn chat_args_reject_bad_context_turns() {
        assert!(ChatArgs::try_parse_from(["memchat", "--context-turns", "many"]).is_err());
    }
}
