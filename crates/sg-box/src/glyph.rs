//! The eight strings a border is made of.
//!
//! ```text
//!  top_left ── horizontal ── top_right
//!     │                         │
//!  vertical      content     vertical
//!     │                         │
//!  tee_right ─ horizontal ─ tee_left      (splitter)
//!     │                         │
//!  bottom_left ─ horizontal ─ bottom_right
//! ```
//!
//! Glyphs are arbitrary strings. Nothing checks that they are one column
//! wide; a multi-column glyph throws the box out of alignment, which is
//! the caller's problem.

/// A configured border glyph set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    /// Left end of a splitter line; the stem points right (`├`).
    pub tee_right: String,
    /// Right end of a splitter line; the stem points left (`┤`).
    pub tee_left: String,
    pub horizontal: String,
    pub vertical: String,
}

impl GlyphSet {
    /// Build a glyph set from its eight parts, in the order corners
    /// (TL, TR, BL, BR), splitter ends (right-tee, left-tee), then the
    /// horizontal and vertical fills.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_left: impl Into<String>,
        bottom_right: impl Into<String>,
        tee_right: impl Into<String>,
        tee_left: impl Into<String>,
        horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        Self {
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
            tee_right: tee_right.into(),
            tee_left: tee_left.into(),
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        }
    }
}

/// The rounded single-line set.
impl Default for GlyphSet {
    fn default() -> Self {
        Self::new("╭", "╮", "╰", "╯", "├", "┤", "─", "│")
    }
}
