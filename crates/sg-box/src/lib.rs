//! # sg-box — box-drawing primitives for semigraph
//!
//! Draws the pieces of a bordered box one line at a time:
//!
//! - **[`glyph`]** — `GlyphSet`, the eight strings a border is made of
//! - **[`builtin`]** — named presets (rounded, square, double, ...)
//! - **[`measure`]** — column counting and glyph repetition
//! - **[`renderer`]** — `BoxRenderer`: top, bottom, splitter, content line, full box
//!
//! The renderer knows nothing about cursor position or color. It writes
//! glyphs and text into an `impl Write`, each line ending in `\n`, and
//! leaves placement and styling to the caller.

pub mod builtin;
pub mod glyph;
pub mod measure;
pub mod renderer;

pub use builtin::{Preset, UnknownPreset};
pub use glyph::GlyphSet;
pub use renderer::BoxRenderer;
