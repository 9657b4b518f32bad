// SPDX-License-Identifier: MIT
//
// Styler — the terminal-directive front end.
//
// Wraps the `ansi` encoders behind one value that can be handed around.
// The only decision it makes is whether rendition sequences are wanted at
// all: a plain styler still moves the cursor and clears the screen but
// drops every SGR sequence, for sinks that are not color terminals.
//
// It never remembers the last style it emitted. Callers that want the
// terminal back in a known state issue another style or a reset.

use std::io::{self, Write};

use crate::ansi;
use crate::style::{Color, Mode, Style};

/// Translates abstract terminal directives into ANSI bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    /// A styler that emits every sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: true }
    }

    /// A styler that suppresses SGR output.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Whether SGR sequences are emitted.
    #[inline]
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Clear the whole visible terminal area.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn clear_screen(&self, w: &mut impl Write) -> io::Result<()> {
        ansi::clear_screen(w)
    }

    /// Position the cursor at 1-based `(row, col)`. No bounds checking.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn move_cursor(&self, w: &mut impl Write, row: i32, col: i32) -> io::Result<()> {
        ansi::cursor_to(w, row, col)
    }

    /// Select a mode and a color pair in one combined sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn set_style(
        &self,
        w: &mut impl Write,
        mode: Mode,
        fg: Color,
        bg: Color,
    ) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        ansi::sgr(w, mode, fg, bg)
    }

    /// [`set_style`](Self::set_style) for a bundled [`Style`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn apply(&self, w: &mut impl Write, style: Style) -> io::Result<()> {
        self.set_style(w, style.mode, style.fg, style.bg)
    }

    /// Return the terminal to its default rendition (SGR 0).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn reset(&self, w: &mut impl Write) -> io::Result<()> {
        if !self.color {
            return Ok(());
        }
        ansi::reset(w)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn capture<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_styler_emits_color() {
        assert!(Styler::default().color_enabled());
    }

    #[test]
    fn set_style_writes_one_combined_sequence() {
        let s = Styler::new();
        let out = capture(|w| s.set_style(w, Mode::Bold, Color::Green, Color::Black));
        assert_eq!(out, "\x1b[1;32;40m");
    }

    #[test]
    fn apply_matches_set_style() {
        let s = Styler::new();
        let style = Style::new(Mode::Underline, Color::Magenta, Color::White);
        assert_eq!(
            capture(|w| s.apply(w, style)),
            capture(|w| s.set_style(w, style.mode, style.fg, style.bg))
        );
    }

    #[test]
    fn styles_are_not_tracked() {
        let s = Styler::new();
        let out = capture(|w| {
            s.set_style(w, Mode::Bold, Color::Cyan, Color::Black)?;
            s.set_style(w, Mode::Bold, Color::Cyan, Color::Black)
        });
        assert_eq!(out, "\x1b[1;36;40m\x1b[1;36;40m");
    }

    #[test]
    fn move_cursor_and_clear() {
        let s = Styler::new();
        let out = capture(|w| {
            s.clear_screen(w)?;
            s.move_cursor(w, 4, 2)
        });
        assert_eq!(out, "\x1b[2J\x1b[4;2H");
    }

    #[test]
    fn plain_styler_drops_sgr_only() {
        let s = Styler::plain();
        let out = capture(|w| {
            s.set_style(w, Mode::Bold, Color::Red, Color::Black)?;
            s.reset(w)?;
            s.clear_screen(w)?;
            s.move_cursor(w, 1, 1)
        });
        assert_eq!(out, "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn reset_emits_sgr_zero() {
        assert_eq!(capture(|w| Styler::new().reset(w)), "\x1b[0m");
    }
}
