//! Integration tests for the rendered horse block.
//!
//! Every property here is checked in display cells, not chars: the horse's
//! head is one char but two cells wide.

use std::time::SystemTime;

use ride_with_whip::core::{
    display_lines, display_width, unix_millis, FrameSample, Track, HORSE_FRAMES,
};

const W: usize = 95;

/// Timestamps spread over several full position cycles.
fn sample_times() -> impl Iterator<Item = u64> {
    (0..400u64).map(|i| i * 977 + 1_700_000_000_000)
}

#[test]
fn block_is_four_rows_of_track_width() {
    let track = Track::default();
    for now in sample_times() {
        let rows = display_lines(&track, now, None);
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(display_width(row), W, "t={now} row {i}: {row:?}");
        }
    }
}

#[test]
fn outer_rows_are_pure_filler() {
    let track = Track::default();
    for now in sample_times() {
        let rows = display_lines(&track, now, None);
        assert!(rows[0].chars().all(|c| c == '.'), "{:?}", rows[0]);
        assert!(rows[3].chars().all(|c| c == '.'), "{:?}", rows[3]);
    }
}

#[test]
fn middle_rows_carry_sprite_glyphs() {
    let track = Track::default();
    let is_glyph = |c: char| c != '.' && c != ' ';
    for now in sample_times() {
        let rows = display_lines(&track, now, None);
        assert!(rows[1].chars().any(is_glyph), "{:?}", rows[1]);
        assert!(rows[2].chars().any(is_glyph), "{:?}", rows[2]);
    }
}

#[test]
fn rows_only_use_track_and_sprite_chars() {
    let track = Track::default();
    let allowed = |c: char| matches!(c, '.' | ' ' | '🐴' | '⏜' | ')' | '/' | '\\' | '~' | 'ﾉ');
    for now in sample_times() {
        for row in display_lines(&track, now, None) {
            assert!(row.chars().all(allowed), "{row:?}");
        }
    }
}

#[test]
fn no_trailing_spaces() {
    let track = Track::default();
    for now in sample_times() {
        for row in display_lines(&track, now, None) {
            assert_eq!(row.trim_end_matches(' '), row);
        }
    }
}

#[test]
fn animation_progresses_over_time() {
    let track = Track::default();
    let positions: Vec<usize> = [0u64, 1_000, 2_000]
        .iter()
        .map(|&t| track.select(t).position())
        .collect();
    assert_eq!(positions, vec![75, 73, 71]);

    let mut differing = 0;
    let mut total = 0;
    for now in sample_times() {
        total += 1;
        if track.select(now).position() != track.select(now + 1_000).position() {
            differing += 1;
        }
    }
    assert!(differing * 2 > total, "{differing}/{total}");
}

#[test]
fn epoch_block_matches_hand_built_rows() {
    // frame 0, position = max_position = 75, remainder = 95 - 75 - 6 = 14
    let rows = display_lines(&Track::default(), 0, None);
    let dots = |n: usize| ".".repeat(n);

    assert_eq!(rows[0], dots(95));
    assert_eq!(rows[1], format!("{}🐴⏜))~{}", dots(75), dots(14)));
    assert_eq!(rows[2], format!("{} ﾉﾉ ﾉﾉ{}", dots(75), dots(14)));
    assert_eq!(rows[3], dots(95));
}

#[test]
fn same_frame_and_step_phase_selects_same_block() {
    // 250*8 = 2000ms frame cycle, 500*75 = 37500ms position cycle: lcm 150000ms.
    let track = Track::default();
    assert_eq!(
        display_lines(&track, 12_345, None),
        display_lines(&track, 12_345 + 150_000, None)
    );
}

#[test]
fn every_frame_is_reachable() {
    let track = Track::default();
    for i in 0..HORSE_FRAMES.len() as u64 {
        let sel = track.select(i * 250);
        assert_eq!(sel.frame_index() as u64, i);
        let rows = display_lines(&track, i * 250, None);
        assert!(rows[1].contains(HORSE_FRAMES[i as usize].sprite[0]));
        assert!(rows[2].contains(HORSE_FRAMES[i as usize].sprite[1]));
    }
}

#[test]
fn observer_receives_one_sample_per_render() {
    let track = Track::default();
    let now = unix_millis(SystemTime::now());
    let mut seen: Vec<FrameSample> = Vec::new();
    display_lines(&track, now, Some(&mut seen));
    display_lines(&track, now + 250, Some(&mut seen));

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].at_ms, now);
    assert_eq!(seen[0].frame_count, 8);
    assert_eq!(seen[0].max_position, 75);
    assert_eq!((seen[0].frame_index + 1) % 8, seen[1].frame_index);
}
