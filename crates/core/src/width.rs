//! Terminal display width.
//!
//! Counting `chars()` is wrong for the horse: `🐴` is one char but two
//! cells. Widths come from the Unicode East Asian Width tables via
//! `unicode-width`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal cells `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Number of terminal cells a single char occupies.
///
/// Control characters have no defined width and count as 0.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}
