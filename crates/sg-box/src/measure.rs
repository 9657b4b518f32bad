//! Column counting and glyph repetition.
//!
//! Layout treats every extended grapheme cluster as one column. Wide
//! characters are not special-cased; `e` followed by a combining accent is
//! one column, and so is `─` even though it is three bytes of UTF-8.

use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;

/// Number of columns `text` occupies.
#[must_use]
pub fn text_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Write `glyph` `count` times.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn repeat(w: &mut impl Write, glyph: &str, count: usize) -> io::Result<()> {
    for _ in 0..count {
        w.write_all(glyph.as_bytes())?;
    }
    Ok(())
}
