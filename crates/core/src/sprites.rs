//! Fixed animation tables.
//!
//! Eight gallop frames. Each frame pairs a background line, whose display
//! width fixes the track width for the whole table, with a two-line
//! sprite drawn over the middle rows of the block. Sprite lines vary
//! between 6 and 8 cells as the legs and tail move.

use crate::types::SPRITE_ROWS;

/// One animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Full-width track line. Only its display width is used.
    pub background: &'static str,
    /// Sprite lines, top to bottom.
    pub sprite: [&'static str; SPRITE_ROWS],
}

/// The bare track: 95 filler cells.
pub const TRACK_LINE: &str =
    "...............................................................................................";

/// The galloping horse, in playback order.
pub static HORSE_FRAMES: [Frame; 8] = [
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜))~", " ﾉﾉ ﾉﾉ"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜)))~", " / \\ ﾉﾉ"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜)))~~", "  \\\\ //"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜))~~", " ﾉﾉ \\ /"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜))~", " ﾉ ﾉ ﾉ"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜))~~", " ﾉﾉ / \\"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜)))~~", "  // \\\\"],
    },
    Frame {
        background: TRACK_LINE,
        sprite: ["🐴⏜)))~", " \\ / ﾉﾉ"],
    },
];
