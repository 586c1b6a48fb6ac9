//! Color spans for a single block row.
//!
//! Filler and spaces stay uncolored. Every maximal run of other chars is
//! wrapped in exactly one color-on/color-off pair, so a row costs two
//! escapes per sprite run instead of two per glyph.

use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::types::SPRITE_COLOR;

#[inline]
fn is_plain(ch: char, filler: char) -> bool {
    ch == filler || ch == ' '
}

/// Encode `line` with sprite runs colored. Does not append a newline.
pub fn encode_colored_line_into(line: &str, filler: char, out: &mut Vec<u8>) -> Result<()> {
    let mut in_color = false;
    for ch in line.chars() {
        let plain = is_plain(ch, filler);
        if plain && in_color {
            out.queue(ResetColor)?;
            in_color = false;
        } else if !plain && !in_color {
            out.queue(SetForegroundColor(Color::AnsiValue(SPRITE_COLOR)))?;
            in_color = true;
        }
        out.queue(Print(ch))?;
    }
    if in_color {
        out.queue(ResetColor)?;
    }
    Ok(())
}
