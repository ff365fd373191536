//! Argument-list formatting: color keyword rewriting and terminal rendering.

mod args;
mod color;

pub use args::{Arg, STYLE_DIRECTIVE, arg_text, colorize, render_args};
pub use color::{Color, ConsoleColor, from_style, paint};
