//! `BoxRenderer` — border and content lines from a configured glyph set.
//!
//! Every primitive writes exactly one line per row of the box, terminated
//! by `\n`. Geometry comes in with each call; the renderer keeps no cursor
//! and no drawing state between calls.
//!
//! # Widths
//!
//! `width` is the length of a border line. Border lines put `width - 2`
//! horizontal glyphs between their two ends. Content lines pad the text to
//! `width - 3` columns between the two vertical glyphs.
//!
//! A width below 3 would make those counts negative; they clamp to zero, so
//! a border degenerates to its two end glyphs and never faults.
//!
//! Text longer than `width - 3` is written whole. It runs past the right
//! edge of the box rather than being cut.

use std::io::{self, Write};

use log::trace;

use crate::glyph::GlyphSet;
use crate::measure::{repeat, text_len};

/// Columns a content line reserves beyond its text.
pub const CONTENT_MARGIN: usize = 3;

/// Columns a border line reserves for its two end glyphs.
const BORDER_ENDS: usize = 2;

/// Draws box lines with one glyph set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxRenderer {
    glyphs: GlyphSet,
}

impl BoxRenderer {
    #[must_use]
    pub const fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }

    /// The configured glyph set.
    #[inline]
    #[must_use]
    pub const fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Replace the glyph set. Lines drawn afterwards use the new glyphs.
    pub fn set_glyphs(&mut self, glyphs: GlyphSet) {
        self.glyphs = glyphs;
    }

    /// Top border: top-left, `width - 2` horizontals, top-right.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn draw_top(&self, w: &mut impl Write, width: usize) -> io::Result<()> {
        trace!("draw_top width={width}");
        self.border(w, &self.glyphs.top_left, &self.glyphs.top_right, width)
    }

    /// Bottom border: bottom-left, `width - 2` horizontals, bottom-right.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn draw_bottom(&self, w: &mut impl Write, width: usize) -> io::Result<()> {
        trace!("draw_bottom width={width}");
        self.border(w, &self.glyphs.bottom_left, &self.glyphs.bottom_right, width)
    }

    /// Splitter under a title: right-tee, `width - 2` horizontals, left-tee.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn draw_splitter(&self, w: &mut impl Write, width: usize) -> io::Result<()> {
        trace!("draw_splitter width={width}");
        self.border(w, &self.glyphs.tee_right, &self.glyphs.tee_left, width)
    }

    /// Content line: vertical, `text`, padding up to `width - 3` columns,
    /// vertical. Overlong text is not truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn draw_content_line(
        &self,
        w: &mut impl Write,
        width: usize,
        text: &str,
    ) -> io::Result<()> {
        let len = text_len(text);
        let pad = width.saturating_sub(CONTENT_MARGIN).saturating_sub(len);
        trace!("draw_content_line width={width} len={len} pad={pad}");

        w.write_all(self.glyphs.vertical.as_bytes())?;
        w.write_all(text.as_bytes())?;
        repeat(w, " ", pad)?;
        w.write_all(self.glyphs.vertical.as_bytes())?;
        w.write_all(b"\n")
    }

    /// An empty frame: top border, `height` blank content lines, bottom
    /// border. Takes no text; use the individual primitives for content.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn draw_full_box(&self, w: &mut impl Write, width: usize, height: usize) -> io::Result<()> {
        self.draw_top(w, width)?;
        for _ in 0..height {
            self.draw_content_line(w, width, "")?;
        }
        self.draw_bottom(w, width)
    }

    fn border(&self, w: &mut impl Write, left: &str, right: &str, width: usize) -> io::Result<()> {
        w.write_all(left.as_bytes())?;
        repeat(w, &self.glyphs.horizontal, width.saturating_sub(BORDER_ENDS))?;
        w.write_all(right.as_bytes())?;
        w.write_all(b"\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::Preset;
    use pretty_assertions::assert_eq;

    /// Letters instead of box glyphs, so every position is easy to read.
    fn lettered() -> BoxRenderer {
        BoxRenderer::new(GlyphSet::new("A", "B", "C", "D", "E", "F", "-", "|"))
    }

    fn draw<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Borders ─────────────────────────────────────────────────────────

    #[test]
    fn top_has_width_minus_two_horizontals() {
        let r = lettered();
        for width in 3..12 {
            let line = draw(|w| r.draw_top(w, width));
            let expected = format!("A{}B\n", "-".repeat(width - 2));
            assert_eq!(line, expected, "width {width}");
        }
    }

    #[test]
    fn bottom_uses_bottom_corners() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_bottom(w, 5)), "C---D\n");
    }

    #[test]
    fn splitter_uses_tees() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_splitter(w, 5)), "E---F\n");
    }

    #[test]
    fn narrow_widths_draw_only_the_ends() {
        let r = lettered();
        for width in 0_usize..3 {
            let expected_run = "-".repeat(width.saturating_sub(2));
            assert_eq!(draw(|w| r.draw_top(w, width)), format!("A{expected_run}B\n"));
            assert_eq!(draw(|w| r.draw_bottom(w, width)), format!("C{expected_run}D\n"));
            assert_eq!(draw(|w| r.draw_splitter(w, width)), format!("E{expected_run}F\n"));
        }
        assert_eq!(draw(|w| r.draw_top(w, 0)), "AB\n");
        assert_eq!(draw(|w| r.draw_top(w, 1)), "AB\n");
    }

    #[test]
    fn multi_character_horizontal_is_repeated_whole() {
        let r = BoxRenderer::new(GlyphSet::new("<", ">", "<", ">", "<", ">", "=-", "|"));
        assert_eq!(draw(|w| r.draw_top(w, 5)), "<=-=-=->\n");
    }

    // ── Content lines ───────────────────────────────────────────────────

    #[test]
    fn content_line_pads_to_width_minus_three() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_content_line(w, 10, "Demo")), "|Demo   |\n");
    }

    #[test]
    fn content_line_exact_fit_has_no_padding() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_content_line(w, 7, "Demo")), "|Demo|\n");
    }

    #[test]
    fn content_line_overflow_is_not_truncated() {
        let r = lettered();
        assert_eq!(
            draw(|w| r.draw_content_line(w, 5, "overflowing")),
            "|overflowing|\n"
        );
    }

    #[test]
    fn content_line_padding_counts_graphemes() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_content_line(w, 8, "©✓")), "|©✓   |\n");
    }

    #[test]
    fn empty_content_line_is_all_padding() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_content_line(w, 8, "")), "|     |\n");
    }

    #[test]
    fn content_line_at_tiny_width() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_content_line(w, 1, "")), "||\n");
    }

    // ── Full box ────────────────────────────────────────────────────────

    #[test]
    fn full_box_has_blank_interior() {
        let r = lettered();
        let expected = "\
A----B
|   |
|   |
C----D
";
        assert_eq!(draw(|w| r.draw_full_box(w, 6, 2)), expected);
    }

    #[test]
    fn full_box_zero_height_is_two_borders() {
        let r = lettered();
        assert_eq!(draw(|w| r.draw_full_box(w, 4, 0)), "A--B\nC--D\n");
    }

    #[test]
    fn full_box_with_rounded_glyphs() {
        let r = BoxRenderer::new(Preset::Rounded.glyphs());
        let expected = "\
╭───╮
│  │
╰───╯
";
        assert_eq!(draw(|w| r.draw_full_box(w, 5, 1)), expected);
    }

    // ── Configuration ───────────────────────────────────────────────────

    #[test]
    fn set_glyphs_changes_later_lines() {
        let mut r = lettered();
        let before = draw(|w| r.draw_top(w, 4));
        r.set_glyphs(Preset::Double.glyphs());
        let after = draw(|w| r.draw_top(w, 4));
        assert_eq!(before, "A--B\n");
        assert_eq!(after, "╔══╗\n");
        assert_eq!(r.glyphs(), &Preset::Double.glyphs());
    }

    #[test]
    fn write_failures_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let r = lettered();
        let err = r.draw_top(&mut Broken, 5).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
