// SPDX-License-Identifier: MIT
//
// sg-term — ANSI styling and cursor control for semigraph.
//
// The lowest layer of the stack. It knows the byte-level encoding of the
// handful of terminal directives a bordered window needs: clear the screen,
// put the cursor somewhere, pick a rendition mode and a color pair. Nothing
// here buffers or tracks terminal state. Every call is one immediate write
// into whatever `impl Write` the caller hands in.

pub mod ansi;
pub mod error;
pub mod style;
pub mod styler;
pub mod terminal;

pub use error::ParseError;
pub use style::{Color, Mode, Style};
pub use styler::Styler;
