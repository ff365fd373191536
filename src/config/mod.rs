//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic stays independent
//! of the serde schema.

mod structs;

pub use structs::{InternalConfig, LevelsConfig, SinkConfig, StackConfig, TerminalConfig};

use crate::console::TerminalConsole;
use crate::internal;
use crate::level::{Severity, Thresholds};
use crate::report::{JsonLinesSink, NullSink, ServerSink};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which server sink `[sink] kind` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    None,
    JsonLines,
}

/// An empty file must still produce a working shim, hence `#[serde(default)]` everywhere.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Flat `clientLogLevel = N` form. Overrides `[levels]` when present.
    #[serde(alias = "clientLogLevel")]
    pub client_log_level: Option<u8>,
    /// Flat `serverLogLevel = N` form. Overrides `[levels]` when present.
    #[serde(alias = "serverLogLevel")]
    pub server_log_level: Option<u8>,
    pub levels: LevelsConfig,
    pub terminal: TerminalConfig,
    pub sink: SinkConfig,
    pub stack: StackConfig,
    pub internal: InternalConfig,
}

impl Config {
    /// Loads from the default location. A missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns the TOML syntax or type error.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `~/.config/consoleshim/consoleshim.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("consoleshim").join("consoleshim.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        let client = match self.client_log_level {
            Some(rank) => rank,
            None => self.levels.client_log_level,
        };
        let server = match self.server_log_level {
            Some(rank) => rank,
            None => self.levels.server_log_level,
        };
        Thresholds::new(client, server)
    }

    /// Unknown names fall back to warn.
    #[must_use]
    pub fn internal_rank(&self) -> u8 {
        self.internal
            .level
            .parse::<Severity>()
            .unwrap_or(Severity::Warn)
            .rank()
    }

    /// Unknown kinds fall back to none.
    #[must_use]
    pub fn parse_sink_kind(&self) -> SinkKind {
        match self.sink.kind.to_lowercase().as_str() {
            "jsonl" | "json" => SinkKind::JsonLines,
            "none" | "" => SinkKind::None,
            other => {
                internal::warn("CONFIG", &format!("Unknown sink kind '{other}', using none"));
                SinkKind::None
            }
        }
    }

    /// Instantiates the configured server sink.
    #[must_use]
    pub fn build_sink(&self) -> Arc<dyn ServerSink> {
        match self.parse_sink_kind() {
            SinkKind::None => Arc::new(NullSink),
            SinkKind::JsonLines => {
                let sink = self
                    .sink
                    .path
                    .as_ref()
                    .map_or_else(JsonLinesSink::new, |path| JsonLinesSink::new().path(path));
                internal::debug(
                    "CONFIG",
                    &format!("JSONL sink at {}", sink.resolve_path().display()),
                );
                Arc::new(sink)
            }
        }
    }

    /// Terminal console matching `[terminal]`.
    #[must_use]
    pub const fn build_console(&self) -> TerminalConsole {
        TerminalConsole::new()
            .enabled(self.terminal.enabled)
            .colors(self.terminal.colors)
            .tags(self.terminal.tags)
    }
}
