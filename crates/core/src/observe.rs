//! Injectable sink for per-render diagnostics.
//!
//! The renderer stays pure: it reports what it picked through a
//! [`FrameObserver`] handed in by the caller instead of touching files.

/// What the renderer computed for one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSample {
    pub at_ms: u64,
    pub frame_index: usize,
    pub frame_count: usize,
    pub position: usize,
    pub max_position: usize,
}

pub trait FrameObserver {
    fn observe(&mut self, sample: &FrameSample);
}

/// Collects samples in memory.
impl FrameObserver for Vec<FrameSample> {
    fn observe(&mut self, sample: &FrameSample) {
        self.push(*sample);
    }
}
