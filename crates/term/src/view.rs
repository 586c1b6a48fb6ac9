//! Frame encoders for the two output modes.
//!
//! This module is pure (no I/O). Output goes into a caller-owned buffer.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::colorize::encode_colored_line_into;
use crate::core::display_width;
use crate::types::SPRITE_COLOR;

/// Interior width of the animation banner box, in cells.
const BANNER_INNER: usize = 60;
const BANNER_TITLE: &str = "🐴 Ride With Whip - Animation Demo 🐴";
const BANNER_HINT: &str = "Press Ctrl+C to exit";
const MOTTO: &str = "✨ 马到成功 · 一马当先 · 龙马精神 ✨";

/// Encode the status block: one colored line per row, each newline-terminated.
pub fn encode_status_into<S: AsRef<str>>(rows: &[S], filler: char, out: &mut Vec<u8>) -> Result<()> {
    for row in rows {
        encode_colored_line_into(row.as_ref(), filler, out)?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode a full animation screen: clear, banner, block, motto.
pub fn encode_animation_into<S: AsRef<str>>(
    rows: &[S],
    filler: char,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let bar = "═".repeat(BANNER_INNER);
    red_line(out, &format!("╔{bar}╗"))?;
    banner_row(out, BANNER_TITLE)?;
    banner_row(out, BANNER_HINT)?;
    red_line(out, &format!("╚{bar}╝"))?;
    out.queue(Print('\n'))?;

    encode_status_into(rows, filler, out)?;

    out.queue(Print('\n'))?;
    red_line(out, MOTTO)?;
    Ok(())
}

fn red(out: &mut Vec<u8>, text: &str) -> Result<()> {
    out.queue(SetForegroundColor(Color::AnsiValue(SPRITE_COLOR)))?;
    out.queue(Print(text))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn red_line(out: &mut Vec<u8>, text: &str) -> Result<()> {
    red(out, text)?;
    out.queue(Print('\n'))?;
    Ok(())
}

/// `║ text ║` with `text` centered by display width.
fn banner_row(out: &mut Vec<u8>, text: &str) -> Result<()> {
    let (left, right) = center_pad(display_width(text), BANNER_INNER);
    red(out, "║")?;
    out.queue(Print(" ".repeat(left)))?;
    out.queue(Print(text))?;
    out.queue(Print(" ".repeat(right)))?;
    red_line(out, "║")
}

fn center_pad(used: usize, inner: usize) -> (usize, usize) {
    let spare = inner.saturating_sub(used);
    let left = spare / 2;
    (left, spare - left)
}
