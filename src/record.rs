//! The unit handed to the server reporter, and the raw shapes an uncaught
//! error arrives in before normalization.

use crate::fmt::{Arg, arg_text};
use crate::level::Severity;

use chrono::{DateTime, Local};
use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use ulid::Ulid;

/// Ordered stack frames, innermost first, one rendered line each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StackTrace {
    frames: Vec<String>,
}

impl StackTrace {
    /// Splits a multi-line trace (a JS `error.stack` or a rendered Rust backtrace).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let frames = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { frames }
    }

    /// `None` unless the runtime actually captured frames (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`).
    #[must_use]
    pub fn capture() -> Option<Self> {
        let backtrace = Backtrace::capture();
        match backtrace.status() {
            BacktraceStatus::Captured => Some(Self::parse(&backtrace.to_string())),
            _ => None,
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.frames.join("\n"))
    }
}

/// Normalized log or uncaught-error event.
///
/// `severity` keeps the tag exactly as it was supplied, so an unregistered tag
/// survives until the reporter's registry lookup rejects it.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub id: String,
    pub timestamp: DateTime<Local>,
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<StackTrace>,
}

impl ErrorRecord {
    /// Untagged record carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            timestamp: Local::now(),
            message: message.into(),
            severity: None,
            url: None,
            line_number: None,
            column_number: None,
            stack: None,
        }
    }

    /// Record for an intercepted console call: the first argument becomes the message.
    #[must_use]
    pub fn from_output(severity: Severity, message: Option<&Arg>) -> Self {
        let message = message.map(arg_text).unwrap_or_default();
        Self::new(message).with_severity(severity.as_str())
    }

    #[must_use]
    pub fn with_severity(mut self, tag: impl Into<String>) -> Self {
        self.severity = Some(tag.into());
        self
    }

    /// A trace without frames is dropped rather than serialized as `[]`.
    #[must_use]
    pub fn with_stack(mut self, stack: Option<StackTrace>) -> Self {
        self.stack = stack.filter(|trace| !trace.is_empty());
        self
    }

    /// The tag as the registry should see it. Untagged records look up the empty name.
    #[must_use]
    pub fn severity_tag(&self) -> &str {
        self.severity.as_deref().unwrap_or("")
    }
}

/// Error object as the host hands it over. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorObject {
    pub message: Option<String>,
    /// Severity tag, when the object was produced by this shim or tagged by the host.
    pub kind: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub stack: Option<StackTrace>,
}

impl ErrorObject {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Parameters of the host's uncaught-error callback.
///
/// Older hosts never pass the error object, so both shapes are first class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawErrorInput {
    WithObject {
        object: ErrorObject,
        url: Option<String>,
        column_number: Option<u32>,
    },
    WithoutObject {
        message: Option<String>,
        url: Option<String>,
        line_number: Option<u32>,
        column_number: Option<u32>,
    },
}

impl RawErrorInput {
    /// Builds the input from the five callback parameters.
    #[must_use]
    pub fn from_callback(
        message: Option<String>,
        url: Option<String>,
        line_number: Option<u32>,
        column_number: Option<u32>,
        object: Option<ErrorObject>,
    ) -> Self {
        match object {
            Some(object) => Self::WithObject {
                object,
                url,
                column_number,
            },
            None => Self::WithoutObject {
                message,
                url,
                line_number,
                column_number,
            },
        }
    }
}
