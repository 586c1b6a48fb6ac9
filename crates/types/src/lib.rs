//! Shared constants for the galloping-horse statusline.
//!
//! Everything here is plain data with no dependencies so the renderer,
//! the terminal layer and the debug sink agree on the same numbers.
//!
//! # Timing
//!
//! All timing values are in milliseconds and are applied to wall-clock
//! time (milliseconds since the Unix epoch):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 250 | Time each gallop frame stays on screen |
//! | `STEP_MS` | 500 | Time between one-cell moves along the track |
//! | `ANIMATE_TICK_MS` | 100 | Redraw interval of the continuous animation |
//!
//! # Layout
//!
//! The rendered block is `BLOCK_ROWS` rows tall. The sprite occupies the
//! two middle rows (`SPRITE_FIRST_ROW` and the row after it); the outer
//! rows are pure track.
//!
//! ```
//! use ride_with_whip_types::{BLOCK_ROWS, SPRITE_FIRST_ROW, SPRITE_ROWS, FILLER};
//!
//! assert_eq!(BLOCK_ROWS, 4);
//! assert_eq!(SPRITE_FIRST_ROW + SPRITE_ROWS, BLOCK_ROWS - 1);
//! assert_eq!(FILLER, '.');
//! ```

/// Duration of a single gallop frame (250ms).
pub const FRAME_MS: u64 = 250;

/// Duration of one step along the track (500ms).
pub const STEP_MS: u64 = 500;

/// Redraw interval in continuous animation mode (100ms).
pub const ANIMATE_TICK_MS: u64 = 100;

/// Cells kept free at the right end of the track for the sprite itself.
pub const TRACK_MARGIN: usize = 20;

/// The "ground" character used for the track and for padding.
pub const FILLER: char = '.';

/// Rows in the rendered block.
pub const BLOCK_ROWS: usize = 4;

/// Lines in every sprite.
pub const SPRITE_ROWS: usize = 2;

/// Block row that receives sprite line 0.
pub const SPRITE_FIRST_ROW: usize = 1;

/// 256-color palette index used for sprite glyphs (a deep red).
pub const SPRITE_COLOR: u8 = 160;

/// Name printed by `--version`.
pub const PRODUCT_NAME: &str = "ride-with-whip statusline";
