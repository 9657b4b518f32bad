//! Where a window is drawn.

/// Placement of a window on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Draw wherever the cursor already is, one line after another.
    #[default]
    Inline,
    /// Draw with the top-left corner at 1-based `(row, col)`. Every line
    /// is positioned explicitly with a cursor move.
    At { row: i32, col: i32 },
}

impl Placement {
    /// The anchor as `(row, col)`. Inline placement reports `(0, 0)`.
    #[must_use]
    pub const fn origin(self) -> (i32, i32) {
        match self {
            Self::Inline => (0, 0),
            Self::At { row, col } => (row, col),
        }
    }

    /// Screen position of the `index`-th line of the window, if anchored.
    #[must_use]
    pub fn line_origin(self, index: usize) -> Option<(i32, i32)> {
        match self {
            Self::Inline => None,
            Self::At { row, col } => {
                let offset = i32::try_from(index).unwrap_or(i32::MAX);
                Some((row.saturating_add(offset), col))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inline() {
        assert_eq!(Placement::default(), Placement::Inline);
    }

    #[test]
    fn inline_reports_zero_origin() {
        assert_eq!(Placement::Inline.origin(), (0, 0));
        assert_eq!(Placement::Inline.line_origin(3), None);
    }

    #[test]
    fn anchored_lines_step_down_one_row() {
        let p = Placement::At { row: 5, col: 10 };
        assert_eq!(p.origin(), (5, 10));
        assert_eq!(p.line_origin(0), Some((5, 10)));
        assert_eq!(p.line_origin(4), Some((9, 10)));
    }

    #[test]
    fn anchored_offset_saturates() {
        let p = Placement::At { row: i32::MAX - 1, col: 1 };
        assert_eq!(p.line_origin(5), Some((i32::MAX, 1)));
    }
}
