//! Track configuration and frame/position selection.
//!
//! Selection is a pure function of a millisecond timestamp:
//!
//! - `frame_index = (now_ms / frame_ms) % frame_count`
//! - `max_position = width - margin`
//! - `position = max_position - (now_ms / step_ms) % max_position`
//!
//! so the horse enters at the right edge, walks left one cell per step and
//! snaps back once it reaches the left end.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::sprites::{Frame, HORSE_FRAMES};
use crate::types::{FILLER, FRAME_MS, STEP_MS, TRACK_MARGIN};
use crate::width::display_width;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("track has no frames")]
    Empty,
    #[error("frame {index} background is {actual} cells wide, expected {expected}")]
    UnevenBackground {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result of selecting a frame for a timestamp. Only [`Track::select`]
/// builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    frame_index: usize,
    position: usize,
    max_position: usize,
}

impl Selection {
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn max_position(&self) -> usize {
        self.max_position
    }
}

/// Immutable animation configuration.
#[derive(Debug, Clone)]
pub struct Track {
    frames: &'static [Frame],
    width: usize,
    filler: char,
    frame_ms: u64,
    step_ms: u64,
    margin: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            frames: &HORSE_FRAMES,
            width: display_width(HORSE_FRAMES[0].background),
            filler: FILLER,
            frame_ms: FRAME_MS,
            step_ms: STEP_MS,
            margin: TRACK_MARGIN,
        }
    }
}

impl Track {
    /// Build a track over custom frames.
    ///
    /// Every background line must have the same display width.
    pub fn new(frames: &'static [Frame]) -> Result<Self, TrackError> {
        let first = frames.first().ok_or(TrackError::Empty)?;
        let width = display_width(first.background);
        for (index, frame) in frames.iter().enumerate().skip(1) {
            let actual = display_width(frame.background);
            if actual != width {
                return Err(TrackError::UnevenBackground {
                    index,
                    expected: width,
                    actual,
                });
            }
        }
        Ok(Self {
            frames,
            width,
            ..Self::default()
        })
    }

    /// Override frame and step durations. Zero is clamped to 1ms.
    pub fn with_timing(mut self, frame_ms: u64, step_ms: u64) -> Self {
        self.frame_ms = frame_ms.max(1);
        self.step_ms = step_ms.max(1);
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Display width of every block row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// `None` when `index` is past the end of this track's table, e.g. for
    /// a selection made by a track with more frames.
    pub fn frame(&self, index: usize) -> Option<&'static Frame> {
        self.frames.get(index)
    }

    /// Rightmost sprite position. Zero when the background is narrower
    /// than the margin.
    pub fn max_position(&self) -> usize {
        self.width.saturating_sub(self.margin)
    }

    pub fn select(&self, now_ms: u64) -> Selection {
        let frame_index = ((now_ms / self.frame_ms) % self.frames.len() as u64) as usize;
        let max_position = self.max_position();
        let position = if max_position == 0 {
            0
        } else {
            max_position - ((now_ms / self.step_ms) % max_position as u64) as usize
        };
        Selection {
            frame_index,
            position,
            max_position,
        }
    }
}

/// Milliseconds since the Unix epoch; times before the epoch map to 0.
pub fn unix_millis(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::char_width;
    use std::time::Duration;

    static NARROW: [Frame; 1] = [Frame {
        background: "..........",
        sprite: ["🐴~", "ﾉﾉ"],
    }];

    static UNEVEN: [Frame; 2] = [
        Frame {
            background: "....",
            sprite: ["a", "b"],
        },
        Frame {
            background: "...",
            sprite: ["a", "b"],
        },
    ];

    #[test]
    fn filler_is_one_narrow_cell() {
        let track = Track::default();
        assert_eq!(track.filler(), '.');
        assert_eq!(char_width(track.filler()), 1);
    }

    #[test]
    fn frame_lookup_out_of_range_is_none() {
        let track = Track::new(&NARROW).unwrap();
        assert!(track.frame(0).is_some());
        assert!(track.frame(1).is_none());
    }

    #[test]
    fn default_track_is_95_wide_with_75_steps() {
        let track = Track::default();
        assert_eq!(track.width(), 95);
        assert_eq!(track.max_position(), 75);
        assert_eq!(track.frame_count(), 8);
    }

    #[test]
    fn epoch_selects_frame_zero_at_right_edge() {
        let sel = Track::default().select(0);
        assert_eq!(sel.frame_index(), 0);
        assert_eq!(sel.position(), 75);
        assert_eq!(sel.max_position(), 75);
    }

    #[test]
    fn frame_advances_every_250ms_and_wraps() {
        let track = Track::default();
        assert_eq!(track.select(249).frame_index(), 0);
        assert_eq!(track.select(250).frame_index(), 1);
        assert_eq!(track.select(250 * 7).frame_index(), 7);
        assert_eq!(track.select(250 * 8).frame_index(), 0);
    }

    #[test]
    fn position_walks_left_and_snaps_back() {
        let track = Track::default();
        assert_eq!(track.select(499).position(), 75);
        assert_eq!(track.select(500).position(), 74);
        assert_eq!(track.select(500 * 74).position(), 1);
        assert_eq!(track.select(500 * 75).position(), 75);
    }

    #[test]
    fn position_stays_in_range() {
        let track = Track::default();
        for ms in (0..200_000).step_by(137) {
            let sel = track.select(ms);
            assert!(sel.position() <= sel.max_position());
            assert!(sel.frame_index() < track.frame_count());
        }
    }

    #[test]
    fn narrow_background_pins_position_to_zero() {
        let track = Track::new(&NARROW).unwrap();
        assert_eq!(track.max_position(), 0);
        for ms in [0, 500, 123_456_789] {
            assert_eq!(track.select(ms).position(), 0);
        }
    }

    #[test]
    fn new_rejects_empty_and_uneven_tables() {
        assert_eq!(Track::new(&[]).unwrap_err(), TrackError::Empty);
        assert_eq!(
            Track::new(&UNEVEN).unwrap_err(),
            TrackError::UnevenBackground {
                index: 1,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn zero_timing_is_clamped() {
        let track = Track::default().with_timing(0, 0);
        let sel = track.select(3);
        assert_eq!(sel.frame_index(), 3);
        assert_eq!(sel.position(), 72);
    }

    #[test]
    fn unix_millis_clamps_pre_epoch() {
        assert_eq!(unix_millis(UNIX_EPOCH + Duration::from_millis(1500)), 1500);
        assert_eq!(unix_millis(UNIX_EPOCH - Duration::from_secs(1)), 0);
    }
}
