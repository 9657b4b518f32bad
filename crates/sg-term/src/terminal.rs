// SPDX-License-Identifier: MIT
//
// Terminal queries.
//
// Safety: `isatty` is the POSIX interface for asking whether a descriptor
// is a terminal; there is no safe libc alternative. The unsafe block is a
// single call with no pointers involved.
#![allow(unsafe_code)]
//
// semigraph never negotiates capabilities. The one question it asks is
// whether stdout is a terminal at all, so `--color auto` can decide to
// emit plain text into pipes and files.

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Tests ───────────────────────────────────────────────────────────────────
