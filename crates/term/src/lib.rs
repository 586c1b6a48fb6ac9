//! Terminal presentation layer.
//!
//! The core hands over plain rows; this crate paints them. Sprite glyphs get
//! one foreground color, track filler keeps the terminal default, and all
//! escape sequences are produced as `crossterm` commands queued into a byte
//! buffer before a single write.
//!
//! - [`colorize`]: per-line color spans
//! - [`view`]: pure encoders for the status block and the animation screen
//! - [`renderer`]: flushes encoded frames to a writer (stdout by default)
//! - [`animate`]: the fixed-cadence redraw loop behind `--animate`

pub mod animate;
pub mod colorize;
pub mod renderer;
pub mod view;

pub use ride_with_whip_core as core;
pub use ride_with_whip_types as types;

pub use animate::{next_deadline, run_animation};
pub use colorize::encode_colored_line_into;
pub use renderer::{prepare_console, TerminalRenderer};
pub use view::{encode_animation_into, encode_status_into};
