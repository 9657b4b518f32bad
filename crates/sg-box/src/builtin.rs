//! Named glyph presets — ready-to-use border styles.
//!
//! The mixed presets pair a double line on one axis with a single line on
//! the other, using the matching corner and tee glyphs from the
//! Box Drawing block.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::glyph::GlyphSet;

/// A built-in border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Single line, rounded corners.
    #[default]
    Rounded,
    /// Single line, square corners.
    Square,
    /// Double line on both axes.
    Double,
    /// Double horizontal, single vertical.
    DoubleHorizontal,
    /// Single horizontal, double vertical.
    DoubleVertical,
    /// Plain 7-bit ASCII, for fonts without box drawing.
    Ascii,
}

/// Returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown glyph preset `{0}` (expected one of: {names})", names = builtin_names().join(", "))]
pub struct UnknownPreset(pub String);

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Rounded,
        Self::Square,
        Self::Double,
        Self::DoubleHorizontal,
        Self::DoubleVertical,
        Self::Ascii,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Square => "square",
            Self::Double => "double",
            Self::DoubleHorizontal => "double-horizontal",
            Self::DoubleVertical => "double-vertical",
            Self::Ascii => "ascii",
        }
    }

    /// The glyph set for this preset.
    #[must_use]
    pub fn glyphs(self) -> GlyphSet {
        match self {
            Self::Rounded => GlyphSet::new("╭", "╮", "╰", "╯", "├", "┤", "─", "│"),
            Self::Square => GlyphSet::new("┌", "┐", "└", "┘", "├", "┤", "─", "│"),
            Self::Double => GlyphSet::new("╔", "╗", "╚", "╝", "╠", "╣", "═", "║"),
            Self::DoubleHorizontal => GlyphSet::new("╒", "╕", "╘", "╛", "╞", "╡", "═", "│"),
            Self::DoubleVertical => GlyphSet::new("╓", "╖", "╙", "╜", "╟", "╢", "─", "║"),
            Self::Ascii => GlyphSet::new("+", "+", "+", "+", "+", "+", "-", "|"),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

/// Look up a builtin glyph set by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_glyphs(name: &str) -> Option<GlyphSet> {
    name.parse::<Preset>().ok().map(Preset::glyphs)
}

/// List all available preset names.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    Preset::ALL.iter().map(|p| p.name()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_glyphs(name).is_some(), "Builtin '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_glyphs("nonexistent").is_none());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DOUBLE".parse::<Preset>().unwrap(), Preset::Double);
    }

    #[test]
    fn unknown_preset_error_lists_names() {
        let err = "wavy".parse::<Preset>().unwrap_err();
        assert_eq!(err, UnknownPreset("wavy".into()));
        let msg = err.to_string();
        assert!(msg.contains("`wavy`"));
        assert!(msg.contains("double-horizontal"));
    }

    #[test]
    fn default_preset_matches_default_glyphs() {
        assert_eq!(Preset::default().glyphs(), GlyphSet::default());
    }

    #[test]
    fn square_uses_square_corners() {
        let g = Preset::Square.glyphs();
        assert_eq!(
            [g.top_left, g.top_right, g.bottom_left, g.bottom_right],
            ["┌", "┐", "└", "┘"]
        );
    }

    #[test]
    fn double_tees_match_double_lines() {
        let g = Preset::Double.glyphs();
        assert_eq!((g.tee_right.as_str(), g.tee_left.as_str()), ("╠", "╣"));
        assert_eq!(g.horizontal, "═");
        assert_eq!(g.vertical, "║");
    }

    #[test]
    fn mixed_presets_pair_axes() {
        let dh = Preset::DoubleHorizontal.glyphs();
        assert_eq!((dh.horizontal.as_str(), dh.vertical.as_str()), ("═", "│"));
        let dv = Preset::DoubleVertical.glyphs();
        assert_eq!((dv.horizontal.as_str(), dv.vertical.as_str()), ("─", "║"));
    }

    #[test]
    fn each_builtin_is_distinct() {
        for (i, a) in Preset::ALL.iter().enumerate() {
            for b in &Preset::ALL[i + 1..] {
                assert_ne!(a.glyphs(), b.glyphs(), "{a} and {b} share glyphs");
            }
        }
    }
}
