// SPDX-License-Identifier: MIT
//
// Errors for turning user-supplied names into SGR values.

use thiserror::Error;

/// A name that does not map to any entry of the SGR tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown mode `{0}` (expected one of: reset, bold, dim, italic, underline, blink, reverse, hidden, strike)")]
    UnknownMode(String),

    #[error("unknown color `{0}` (expected one of: black, red, green, yellow, blue, magenta, cyan, white)")]
    UnknownColor(String),

    #[error("malformed style `{0}` (expected `mode,fg,bg`)")]
    MalformedStyle(String),
}
