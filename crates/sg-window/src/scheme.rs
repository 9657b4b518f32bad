//! The two styles a render pass switches between.

use sg_term::{Color, Mode, Style};

/// Styles applied around a render pass.
///
/// `frame` is set before the first border line. `resting` is set after the
/// last one and is what text printed after the window inherits. It is a
/// style like any other, not a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub frame: Style,
    pub resting: Style,
}

impl Scheme {
    /// Bold green on black for the frame, bold cyan on black afterwards.
    pub const CLASSIC: Self = Self {
        frame: Style::new(Mode::Bold, Color::Green, Color::Black),
        resting: Style::new(Mode::Bold, Color::Cyan, Color::Black),
    };

    #[must_use]
    pub const fn new(frame: Style, resting: Style) -> Self {
        Self { frame, resting }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let s = Scheme::default();
        assert_eq!(s.frame, Style::new(Mode::Bold, Color::Green, Color::Black));
        assert_eq!(s.resting, Style::new(Mode::Bold, Color::Cyan, Color::Black));
    }
}
