//! Block composition: maps a [`Selection`] onto 4 rows of track.
//!
//! Rows 0 and 3 are filler only. Rows 1 and 2 are `position` filler cells,
//! the sprite line verbatim, then filler up to the track width. Widths are
//! measured in display cells so a 2-cell glyph never throws the padding off.
//! A selection naming a frame this track does not have yields filler rows.

use crate::observe::{FrameObserver, FrameSample};
use crate::track::{Selection, Track};
use crate::types::{BLOCK_ROWS, SPRITE_FIRST_ROW, SPRITE_ROWS};
use crate::width::display_width;

/// The rendered rows, top to bottom.
pub type Block = [String; BLOCK_ROWS];

/// Compose rows into existing buffers.
///
/// Reuses the strings' allocations; the animation loop calls this every tick.
pub fn compose_into(track: &Track, sel: &Selection, rows: &mut Block) {
    let width = track.width();
    let filler = track.filler();
    let sprite = track.frame(sel.frame_index()).map(|frame| &frame.sprite);

    for (i, row) in rows.iter_mut().enumerate() {
        row.clear();
        match sprite.and_then(|sprite| sprite_line(sprite, i)) {
            Some(line) => {
                push_filler(row, filler, sel.position());
                row.push_str(line);
                let used = sel.position() + display_width(line);
                push_filler(row, filler, width.saturating_sub(used));
            }
            None => push_filler(row, filler, width),
        }
    }
}

pub fn compose(track: &Track, sel: &Selection) -> Block {
    let mut rows = Block::default();
    compose_into(track, sel, &mut rows);
    rows
}

/// Select and compose the block for `now_ms`, reporting the selection to
/// `observer` when one is attached.
pub fn display_lines(
    track: &Track,
    now_ms: u64,
    observer: Option<&mut dyn FrameObserver>,
) -> Block {
    let sel = track.select(now_ms);
    if let Some(observer) = observer {
        observer.observe(&FrameSample {
            at_ms: now_ms,
            frame_index: sel.frame_index(),
            frame_count: track.frame_count(),
            position: sel.position(),
            max_position: sel.max_position(),
        });
    }
    compose(track, &sel)
}

fn sprite_line<'a>(sprite: &[&'a str; SPRITE_ROWS], row: usize) -> Option<&'a str> {
    row.checked_sub(SPRITE_FIRST_ROW)
        .and_then(|i| sprite.get(i))
        .copied()
}

#[inline]
fn push_filler(row: &mut String, filler: char, count: usize) {
    row.extend(std::iter::repeat(filler).take(count));
}
