//! Console argument lists: the color keyword rewrite applied before an
//! original primitive runs, and plain-text rendering for terminal hosts.

use super::color::{self, Color, ConsoleColor};
use serde_json::Value;

/// One console call argument. Console calls accept heterogeneous values.
pub type Arg = Value;

/// Marker that makes the next argument a style declaration.
pub const STYLE_DIRECTIVE: &str = "%c";

/// Strings render raw, everything else as compact JSON.
#[must_use]
pub fn arg_text(arg: &Arg) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Rewrites `[msg, "green", ...]` into `["%cmsg", "color: green;", ...]`.
///
/// Only a recognized keyword in the second slot triggers the rewrite. Any other
/// second argument leaves the list untouched, so a `%c` marker is never paired
/// with a value that is not a style declaration.
#[must_use]
pub fn colorize(mut args: Vec<Arg>) -> Vec<Arg> {
    let Some(keyword) = args
        .get(1)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<ConsoleColor>().ok())
    else {
        return args;
    };

    args[0] = Value::String(format!("{STYLE_DIRECTIVE}{}", arg_text(&args[0])));
    args[1] = Value::String(keyword.style().to_string());
    args
}

/// Renders an argument list to one line of terminal text.
///
/// Each `%c` in a string first argument consumes the next argument as a style
/// declaration. With `colors` on, declarations naming a known color become ANSI
/// sequences; with `colors` off they are dropped. Unconsumed arguments follow,
/// space separated.
#[must_use]
pub fn render_args(args: &[Arg], colors: bool) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let mut rest = rest.iter();
    let mut out = String::new();

    match first {
        Value::String(template) if template.contains(STYLE_DIRECTIVE) => {
            let mut styled = false;
            for (i, piece) in template.split(STYLE_DIRECTIVE).enumerate() {
                if i > 0 {
                    let style = rest.next().map(arg_text).unwrap_or_default();
                    if colors {
                        if styled {
                            out.push_str(Color::RESET);
                        }
                        styled = match color::from_style(&style) {
                            Some(c) => {
                                out.push_str(&c.fg_ansi());
                                true
                            }
                            None => false,
                        };
                    }
                }
                out.push_str(piece);
            }
            if styled {
                out.push_str(Color::RESET);
            }
        }
        other => out.push_str(&arg_text(other)),
    }

    for arg in rest {
        out.push(' ');
        out.push_str(&arg_text(arg));
    }

    out
}
