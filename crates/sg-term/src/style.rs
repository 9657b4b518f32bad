// SPDX-License-Identifier: MIT
//
// SGR code tables.
//
// Each enum maps to its wire value through an explicit `match`, never
// through discriminant arithmetic. Reordering variants cannot change
// what reaches the terminal.
//
// Mode codes follow ECMA-48. Code 6 (rapid blink) is intentionally not
// offered; that is the gap between `Blink` and `Reverse`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ─── Mode ────────────────────────────────────────────────────────────────────

/// Text rendition mode, the first parameter of a combined SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// SGR 0 — all attributes off.
    #[default]
    Reset,
    /// SGR 1 — increased intensity.
    Bold,
    /// SGR 2 — faint.
    Dim,
    /// SGR 3 — italic.
    Italic,
    /// SGR 4 — single underline.
    Underline,
    /// SGR 5 — slow blink.
    Blink,
    /// SGR 7 — swap foreground and background.
    Reverse,
    /// SGR 8 — concealed.
    Hidden,
    /// SGR 9 — crossed out.
    Strike,
}

impl Mode {
    /// Every mode, in code order.
    pub const ALL: [Self; 9] = [
        Self::Reset,
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
        Self::Hidden,
        Self::Strike,
    ];

    /// The SGR parameter for this mode.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Reset => 0,
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Hidden => 8,
            Self::Strike => 9,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Hidden => "hidden",
            Self::Strike => "strike",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| ParseError::UnknownMode(s.to_owned()))
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// One of the eight standard ANSI colors.
///
/// The same palette serves both planes: [`fg_code`](Self::fg_code) yields
/// 30–37 and [`bg_code`](Self::bg_code) yields 40–47.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color, in code order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// SGR foreground parameter (30–37).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// SGR background parameter (40–47).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        match self {
            Self::Black => 40,
            Self::Red => 41,
            Self::Green => 42,
            Self::Yellow => 43,
            Self::Blue => 44,
            Self::Magenta => 45,
            Self::Cyan => 46,
            Self::White => 47,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ParseError::UnknownColor(s.to_owned()))
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// A complete rendition: mode plus a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub mode: Mode,
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    #[must_use]
    pub const fn new(mode: Mode, fg: Color, bg: Color) -> Self {
        Self { mode, fg, bg }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.mode, self.fg, self.bg)
    }
}

/// Parses `mode,fg,bg`, e.g. `bold,green,black`.
impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [mode, fg, bg] = parts.as_slice() else {
            return Err(ParseError::MalformedStyle(s.to_owned()));
        };
        Ok(Self::new(mode.parse()?, fg.parse()?, bg.parse()?))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
