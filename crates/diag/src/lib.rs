//! Debug sink: timing trace for `--debug`.
//!
//! Hosts invoke the statusline once per refresh, so a single process never
//! sees two frames. To show the refresh cadence, each invocation appends a
//! line to a log in the temp dir and leaves a small JSON record of what it
//! drew; the next invocation reads that record back to print the elapsed
//! time. Nothing here feeds back into rendering.
//!
//! Every failure is swallowed at the [`FrameObserver`] boundary and only
//! surfaces as a `debug!` record.

pub mod state;

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use log::debug;

use ride_with_whip_core::{FrameObserver, FrameSample};

pub use state::{load_call_state, save_call_state, CallState};

pub const LOG_FILE_NAME: &str = "ride_with_whip_debug.log";
pub const STATE_FILE_NAME: &str = "ride_with_whip_debug_state.json";

/// Where the trace log and the last-call record live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugPaths {
    pub log: PathBuf,
    pub state: PathBuf,
}

impl DebugPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            log: dir.join(LOG_FILE_NAME),
            state: dir.join(STATE_FILE_NAME),
        }
    }

    pub fn temp() -> Self {
        Self::in_dir(std::env::temp_dir())
    }
}

/// File-backed [`FrameObserver`].
pub struct DebugLog {
    paths: DebugPaths,
    log: File,
}

impl DebugLog {
    /// Open (creating if needed) the trace log in append mode.
    pub fn open(paths: DebugPaths) -> Result<Self> {
        let log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.log)
            .with_context(|| format!("open debug log {}", paths.log.display()))?;
        Ok(Self { paths, log })
    }

    /// Append one trace line and overwrite the last-call record.
    pub fn record(&mut self, sample: &FrameSample) -> Result<()> {
        let since_last = load_call_state(&self.paths.state)
            .and_then(|prev| sample.at_ms.checked_sub(prev.last_call_time))
            .map(Duration::from_millis);

        let line = format_line(&timestamp(sample.at_ms), sample, since_last);
        writeln!(self.log, "{line}").context("write debug log")?;

        save_call_state(
            &self.paths.state,
            &CallState {
                last_call_time: sample.at_ms,
                frame_index: sample.frame_index,
                position: sample.position,
            },
        )
    }
}

impl FrameObserver for DebugLog {
    fn observe(&mut self, sample: &FrameSample) {
        if let Err(err) = self.record(sample) {
            debug!("debug trace skipped: {err:#}");
        }
    }
}

/// Local wall-clock rendering of `at_ms`, millisecond precision.
pub fn timestamp(at_ms: u64) -> String {
    i64::try_from(at_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string()
        })
        .unwrap_or_else(|| at_ms.to_string())
}

/// One trace line, without the trailing newline.
pub fn format_line(stamp: &str, sample: &FrameSample, since_last: Option<Duration>) -> String {
    let since = match since_last {
        Some(d) => format!("{d:?}"),
        None => "n/a".to_string(),
    };
    format!(
        "[{stamp}] frame={}/{} position={}/{} time_since_last={since}",
        sample.frame_index, sample.frame_count, sample.position, sample.max_position
    )
}
