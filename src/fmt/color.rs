//! The four console color keywords, their CSS style declarations, and the
//! 24-bit terminal colors they map to on a native host.

use std::fmt;
use std::str::FromStr;

/// 24-bit color for terminal rendering of `color: <name>;` declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#RRGGBB`. Malformed input falls back to white so a bad style never breaks output.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Self::white();
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        Self { r, g, b }
    }

    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 184, 108)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(98, 114, 164)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Wraps `text` in the color's escape and a reset.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}

/// Keywords recognized as the second argument of a console call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Green,
    Orange,
    Blue,
    Red,
}

impl ConsoleColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }

    /// CSS declaration consumed by a `%c` directive.
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Green => "color: green;",
            Self::Orange => "color: orange;",
            Self::Blue => "color: blue;",
            Self::Red => "color: red;",
        }
    }

    #[must_use]
    pub const fn terminal(self) -> Color {
        match self {
            Self::Green => Color::green(),
            Self::Orange => Color::orange(),
            Self::Blue => Color::blue(),
            Self::Red => Color::red(),
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Green, Self::Orange, Self::Blue, Self::Red]
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords are matched exactly, as the console sees them.
impl FromStr for ConsoleColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "orange" => Ok(Self::Orange),
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            _ => Err(()),
        }
    }
}

/// Resolves the color named by a CSS declaration such as `color: green;`.
///
/// Keyword colors map to their terminal palette, `#RRGGBB` goes through [`Color::from_hex`].
/// Anything else yields `None` and renders unstyled.
#[must_use]
pub fn from_style(declaration: &str) -> Option<Color> {
    declaration
        .split(';')
        .filter_map(|part| part.split_once(':'))
        .find(|(property, _)| property.trim().eq_ignore_ascii_case("color"))
        .and_then(|(_, value)| {
            let value = value.trim();
            if value.starts_with('#') {
                Some(Color::from_hex(value))
            } else {
                value.parse::<ConsoleColor>().ok().map(ConsoleColor::terminal)
            }
        })
}
