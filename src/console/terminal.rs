//! Native host console: stdout for log/debug/info, stderr for warn/error,
//! with `%c` color directives rendered as ANSI escapes.

use super::Console;
use crate::fmt::{Arg, Color, paint, render_args};
use crate::level::Severity;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct TerminalConsole {
    enabled: bool,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors: bool,
    tags: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: true,
            colors: true,
            tags: true,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn tags(mut self, enabled: bool) -> Self {
        self.tags = enabled;
        self
    }

    const fn tag_color(severity: Severity) -> Color {
        match severity {
            Severity::Log => Color::white(),
            Severity::Debug => Color::purple(),
            Severity::Info => Color::cyan(),
            Severity::Warn => Color::yellow(),
            Severity::Error => Color::red(),
        }
    }

    /// The exact line `emit` would print, without the trailing newline.
    #[must_use]
    pub fn format_line(&self, severity: Severity, args: &[Arg]) -> String {
        let body = render_args(args, self.colors);
        if !self.tags {
            return body;
        }

        let tag = format!("[{:<5}]", severity.as_str().to_uppercase());
        let tag = if self.colors {
            paint(&tag, Self::tag_color(severity))
        } else {
            tag
        };
        format!("{tag} {body}")
    }
}

impl Console for TerminalConsole {
    fn emit(&self, severity: Severity, args: &[Arg]) {
        if !self.enabled {
            return;
        }

        let line = self.format_line(severity, args);

        // A closed pipe must not take the caller down with it.
        let _ = if severity >= Severity::Warn {
            writeln!(io::stderr(), "{line}")
        } else {
            writeln!(io::stdout(), "{line}")
        };
    }
}
