use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingCredential(String),

    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MemchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingCredential("GOOGLE_API_KEY".into());
        assert_eq!(
            err.to_string(),
            "GOOGLE_API_KEY not found in environment variables"
        );

        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.context_turns = 500".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.context_turns = 500"
        );
    }

    #[test]
    fn memchat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MemchatError = config_err.into();
        assert!(matches!(err, MemchatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn memchat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: MemchatError = io_err.into();
        assert!(matches!(err, MemchatError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }
}
