//! Severity names, their fixed verbosity ranks, and the two thresholds that
//! gate console output and server forwarding.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Highest rank. A threshold at this value lets every severity through.
pub const MOST_VERBOSE: u8 = 5;

/// One of the five console output primitives.
///
/// Declared from most verbose to most severe, so the derived `Ord` follows rank descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Plain `log` output. Also accepts the name `trace`.
    Log,
    /// Development-time diagnostics.
    Debug,
    /// Normal operational milestones.
    Info,
    /// Non-fatal anomalies.
    Warn,
    /// Failures, including uncaught errors.
    Error,
}

impl Severity {
    /// Ranks are fixed: log=5 down to error=1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Log => 5,
            Self::Debug => 4,
            Self::Info => 3,
            Self::Warn => 2,
            Self::Error => 1,
        }
    }

    /// Lowercase, matching the console primitive names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Used by the console table, help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Log, Self::Debug, Self::Info, Self::Warn, Self::Error]
    }

    /// Dense index for five-slot tables.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Log => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warn => 3,
            Self::Error => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "trace" => Ok(Self::Log),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Self::Log,
            log::Level::Debug => Self::Debug,
            log::Level::Info => Self::Info,
            log::Level::Warn => Self::Warn,
            log::Level::Error => Self::Error,
        }
    }
}

/// Registry lookup by name.
///
/// # Errors
/// Returns [`Error::UnknownSeverity`] for any name outside the five registered severities.
pub fn rank_of(name: &str) -> Result<u8, Error> {
    name.parse::<Severity>().map(Severity::rank)
}

/// Client-visible and server-forwarding ranks. Set once at bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub client: u8,
    pub server: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            client: MOST_VERBOSE,
            server: MOST_VERBOSE,
        }
    }
}

impl Thresholds {
    #[must_use]
    pub const fn new(client: u8, server: u8) -> Self {
        Self { client, server }
    }

    /// Whether the original console primitive runs for this severity.
    #[must_use]
    pub const fn shows(self, severity: Severity) -> bool {
        passes(self.client, severity.rank())
    }

    /// Whether a record of this severity reaches the server sink.
    #[must_use]
    pub const fn forwards(self, severity: Severity) -> bool {
        passes(self.server, severity.rank())
    }
}

/// A threshold admits a message when it is at least as verbose as the message's rank.
#[must_use]
pub const fn passes(threshold: u8, rank: u8) -> bool {
    threshold >= rank
}
