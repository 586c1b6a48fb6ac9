//! Last-call record persisted between invocations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallState {
    /// Unix milliseconds of the previous render.
    pub last_call_time: u64,
    pub frame_index: usize,
    pub position: usize,
}

/// `None` on first run or when the record is unreadable.
pub fn load_call_state(path: &Path) -> Option<CallState> {
    let data = fs::read(path).ok()?;
    match serde_json::from_slice(&data) {
        Ok(state) => Some(state),
        Err(err) => {
            debug!("ignoring corrupt call state {}: {err}", path.display());
            None
        }
    }
}

pub fn save_call_state(path: &Path, state: &CallState) -> Result<()> {
    let data = serde_json::to_vec(state)?;
    fs::write(path, data).with_context(|| format!("write call state {}", path.display()))?;
    Ok(())
}
