//! Continuous animation mode.
//!
//! Redraws the whole screen every `ANIMATE_TICK_MS` from the current wall
//! clock. There is no state between ticks beyond the schedule itself; the
//! loop ends only when the process is interrupted (or after `max_ticks`).

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;

use crate::core::{compose_into, unix_millis, Block, Track};
use crate::renderer::TerminalRenderer;
use crate::types::ANIMATE_TICK_MS;

/// Next tick after `scheduled`.
///
/// When a frame overran by more than a whole tick, the schedule restarts
/// from `now` instead of firing a burst of catch-up frames.
pub fn next_deadline(scheduled: Instant, now: Instant, tick: Duration) -> Instant {
    let next = scheduled + tick;
    if now > next {
        now + tick
    } else {
        next
    }
}

/// Run the animation. `None` runs until interrupted.
pub fn run_animation<W: Write>(
    track: &Track,
    term: &mut TerminalRenderer<W>,
    max_ticks: Option<u64>,
) -> Result<()> {
    let tick = Duration::from_millis(ANIMATE_TICK_MS);
    let mut rows = Block::default();
    let mut deadline = Instant::now() + tick;
    let mut ticks = 0u64;

    term.clear()?;

    while max_ticks.map_or(true, |max| ticks < max) {
        let timeout = deadline
            .checked_duration_since(Instant::now())
            .unwrap_or_else(|| Duration::from_secs(0));
        thread::sleep(timeout);

        let sel = track.select(unix_millis(SystemTime::now()));
        compose_into(track, &sel, &mut rows);
        term.draw_animation(&rows, track.filler())?;

        ticks += 1;
        deadline = next_deadline(deadline, Instant::now(), tick);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_advances_by_one_tick() {
        let tick = Duration::from_millis(100);
        let t0 = Instant::now();
        assert_eq!(next_deadline(t0, t0 + Duration::from_millis(5), tick), t0 + tick);
    }

    #[test]
    fn deadline_resyncs_after_overrun() {
        let tick = Duration::from_millis(100);
        let t0 = Instant::now();
        let late = t0 + Duration::from_millis(350);
        assert_eq!(next_deadline(t0, late, tick), late + tick);
    }

    #[test]
    fn bounded_run_draws_each_tick() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        run_animation(&Track::default(), &mut term, Some(2)).unwrap();
        let text = String::from_utf8(term.into_inner()).unwrap();
        // One initial clear plus one per frame.
        assert_eq!(text.matches("\x1b[2J").count(), 3);
    }
}
