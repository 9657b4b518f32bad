// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about whether color is wanted — that's the `Styler`'s job.
// This module just knows the byte-level encoding.
//
// Cursor coordinates are 1-based, exactly as the terminal sees them, and are
// passed through without bounds checking. Zero or negative values go out
// verbatim; what the terminal does with them is its own business.
use std::io::{self, Write};

use crate::style::{Color, Mode};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(row, col)` using the CUP (Cursor Position) sequence.
#[inline]
pub fn cursor_to(w: &mut impl Write, row: i32, col: i32) -> io::Result<()> {
    write!(w, "\x1b[{row};{col}H")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2). The cursor does not move.
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Rendition ───────────────────────────────────────────────────────────────

/// Emit mode, foreground and background as a single CSI sequence:
/// `ESC [ mode ; fg ; bg m`.
#[inline]
pub fn sgr(w: &mut impl Write, mode: Mode, fg: Color, bg: Color) -> io::Result<()> {
    write!(w, "\x1b[{};{};{}m", mode.code(), fg.fg_code(), bg.bg_code())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
