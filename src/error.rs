//! Unified error type for all consoleshim operations.

/// Error type for consoleshim operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Severity tag with no entry in the level registry.
    UnknownSeverity(String),
    /// Uncaught-error callback carried neither an error object nor a message.
    MalformedErrorInput,
    /// The `log` facade already has a logger bound.
    LoggerInstall(String),
    /// Format/serialization error.
    Format(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::UnknownSeverity(name) => write!(f, "unknown severity: '{name}'"),
            Self::MalformedErrorInput => write!(f, "error input has neither object nor message"),
            Self::LoggerInstall(e) => write!(f, "logger install failed: {e}"),
            Self::Format(s) => write!(f, "format error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(format!("JSON serialization failed: {e}"))
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Self::LoggerInstall(e.to_string())
    }
}
