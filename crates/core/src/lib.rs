//! Sprite renderer core - pure, deterministic, and testable
//!
//! This crate turns a wall-clock timestamp into the 4-line track block
//! showing the galloping horse. It has **no I/O**: no terminal, no files,
//! no clock reads. Callers pass the timestamp in, which makes every frame
//! reproducible in tests.
//!
//! # Module Structure
//!
//! - [`width`]: terminal display-cell width (emoji/CJK = 2, combining = 0)
//! - [`sprites`]: the fixed frame and sprite tables
//! - [`track`]: track configuration plus frame/position selection
//! - [`compose`]: builds the block rows from a selection
//! - [`observe`]: injectable sink receiving each computed sample
//!
//! # Example
//!
//! ```
//! use ride_with_whip_core::{display_lines, display_width, Track};
//!
//! let track = Track::default();
//! let rows = display_lines(&track, 0, None);
//!
//! assert_eq!(rows.len(), 4);
//! for row in &rows {
//!     assert_eq!(display_width(row), track.width());
//! }
//! ```
//!
//! # Timing
//!
//! - **Frame**: advances every 250ms and cycles through all frames
//! - **Position**: moves one cell left every 500ms, wrapping back to the
//!   right edge after reaching the start of the track

pub mod compose;
pub mod observe;
pub mod sprites;
pub mod track;
pub mod width;

pub use ride_with_whip_types as types;

pub use compose::{compose, compose_into, display_lines, Block};
pub use observe::{FrameObserver, FrameSample};
pub use sprites::{Frame, HORSE_FRAMES, TRACK_LINE};
pub use track::{unix_millis, Selection, Track, TrackError};
pub use width::{char_width, display_width};
