//! `Session` — one output sink and the components that write into it.
//!
//! Windows do not reach for a global terminal. They are rendered *through*
//! a session, which owns the sink and hands the styler and renderer the
//! same `&mut W`. Tests use `Session<Vec<u8>>` and read the bytes back
//! with [`get_ref`](Session::get_ref).

use std::io::{self, Write};

use sg_box::BoxRenderer;
use sg_term::Styler;

use crate::scheme::Scheme;

/// An output sink bound to a [`Styler`], a [`BoxRenderer`] and a [`Scheme`].
#[derive(Debug)]
pub struct Session<W: Write> {
    out: W,
    styler: Styler,
    renderer: BoxRenderer,
    scheme: Scheme,
}

impl<W: Write> Session<W> {
    /// A session with a color [`Styler`] and the classic [`Scheme`].
    pub fn new(out: W, renderer: BoxRenderer) -> Self {
        Self {
            out,
            styler: Styler::new(),
            renderer,
            scheme: Scheme::default(),
        }
    }

    #[must_use]
    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.styler = styler;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub const fn styler(&self) -> &Styler {
        &self.styler
    }

    pub const fn renderer(&self) -> &BoxRenderer {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut BoxRenderer {
        &mut self.renderer
    }

    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Clear the whole screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.styler.clear_screen(&mut self.out)
    }

    /// Move the cursor to 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn move_cursor(&mut self, row: i32, col: i32) -> io::Result<()> {
        self.styler.move_cursor(&mut self.out, row, col)
    }

    /// Reset the terminal rendition to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn reset(&mut self) -> io::Result<()> {
        self.styler.reset(&mut self.out)
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Split borrow for render passes: the sink mutably, the rest shared.
    pub(crate) const fn parts(&mut self) -> (&mut W, &Styler, &BoxRenderer, &Scheme) {
        (&mut self.out, &self.styler, &self.renderer, &self.scheme)
    }
}
