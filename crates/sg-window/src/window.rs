//! `Window` — a title, rows of text, and the box that fits them.
//!
//! # Geometry
//!
//! Width is a running maximum. Every `set_title` and `add_row` computes
//! `columns(text) + 3` and keeps the larger of that and the current width,
//! so width never shrinks, not even when a long title is replaced by a short
//! one. Height is the number of rows; the title does not count.
//!
//! # Rendering
//!
//! [`render`](Window::render) takes `&self`: drawing a window never changes
//! it, and rendering an unchanged window twice writes the same bytes twice.
//! Rows may still be added after a render; the next render picks up the new
//! geometry.

use std::io::{self, Write};

use log::debug;
use sg_box::measure::text_len;
use sg_box::renderer::CONTENT_MARGIN;
use sg_box::BoxRenderer;
use sg_term::Styler;

use crate::placement::Placement;
use crate::session::Session;

/// A bordered window with an optional title and any number of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    placement: Placement,
    title: String,
    rows: Vec<String>,
    width: usize,
    height: usize,
}

impl Window {
    /// An empty inline window: no title, no rows, zero width and height.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty window anchored at 1-based `(row, col)`.
    #[must_use]
    pub fn at(row: i32, col: i32) -> Self {
        Self {
            placement: Placement::At { row, col },
            ..Self::default()
        }
    }

    pub const fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Set the title and widen the window to fit it.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
        self.fit(text_len(&self.title));
    }

    /// Append a row, grow the height by one, and widen the window to fit it.
    pub fn add_row(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.fit(text_len(&text));
        self.rows.push(text);
        self.height += 1;
    }

    #[inline]
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Border width: the longest of title and rows, plus the margin.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Draw the full window: frame style, top border, title, splitter,
    /// rows, bottom border, resting style.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the session's sink fails.
    pub fn render<W: Write>(&self, session: &mut Session<W>) -> io::Result<()> {
        debug!(
            "render window width={} height={} placement={:?}",
            self.width, self.height, self.placement
        );
        let (out, styler, renderer, scheme) = session.parts();
        let mut pen = Pen::new(out, styler, self.placement);

        styler.apply(pen.out, scheme.frame)?;
        pen.line()?;
        renderer.draw_top(pen.out, self.width)?;
        pen.line()?;
        renderer.draw_content_line(pen.out, self.width, &self.title)?;
        pen.line()?;
        renderer.draw_splitter(pen.out, self.width)?;
        self.render_rows(&mut pen, renderer)?;
        pen.line()?;
        renderer.draw_bottom(pen.out, self.width)?;
        styler.apply(pen.out, scheme.resting)
    }

    /// Draw the border and rows only, without the title line and splitter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the session's sink fails.
    pub fn render_frame<W: Write>(&self, session: &mut Session<W>) -> io::Result<()> {
        debug!(
            "render frame width={} height={} placement={:?}",
            self.width, self.height, self.placement
        );
        let (out, styler, renderer, scheme) = session.parts();
        let mut pen = Pen::new(out, styler, self.placement);

        styler.apply(pen.out, scheme.frame)?;
        pen.line()?;
        renderer.draw_top(pen.out, self.width)?;
        self.render_rows(&mut pen, renderer)?;
        pen.line()?;
        renderer.draw_bottom(pen.out, self.width)?;
        styler.apply(pen.out, scheme.resting)
    }

    /// Write a plain-text descriptor of the window, for debugging.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn show(&self, w: &mut impl Write) -> io::Result<()> {
        let (y, x) = self.placement.origin();
        writeln!(w, "windows descriptor:")?;
        if !self.title.is_empty() {
            writeln!(w, "title: {}", self.title)?;
        }
        writeln!(w, "x: {x}")?;
        writeln!(w, "y: {y}")?;
        writeln!(w, "width: {}", self.width)?;
        writeln!(w, "height: {}", self.height)?;
        writeln!(w)
    }

    fn render_rows<W: Write>(
        &self,
        pen: &mut Pen<'_, W>,
        renderer: &BoxRenderer,
    ) -> io::Result<()> {
        for row in &self.rows {
            pen.line()?;
            renderer.draw_content_line(pen.out, self.width, row)?;
        }
        Ok(())
    }

    fn fit(&mut self, columns: usize) {
        self.width = self.width.max(columns + CONTENT_MARGIN);
    }
}

/// Positions each line of a render pass according to the placement.
struct Pen<'a, W: Write> {
    out: &'a mut W,
    styler: &'a Styler,
    placement: Placement,
    next: usize,
}

impl<'a, W: Write> Pen<'a, W> {
    const fn new(out: &'a mut W, styler: &'a Styler, placement: Placement) -> Self {
        Self {
            out,
            styler,
            placement,
            next: 0,
        }
    }

    /// Move to the start of the next line. Inline placement relies on the
    /// newline the previous line ended with.
    fn line(&mut self) -> io::Result<()> {
        let origin = self.placement.line_origin(self.next);
        self.next += 1;
        match origin {
            Some((row, col)) => self.styler.move_cursor(self.out, row, col),
            None => Ok(()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
