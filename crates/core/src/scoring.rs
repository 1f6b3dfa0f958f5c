//! Scoring module - line points, level thresholds and gravity pacing
//!
//! - Each cleared line is worth `POINTS_PER_LINE * level`.
//! - Level `n` is left once the cumulative score reaches `n * LEVEL_THRESHOLD`;
//!   at most one level is gained per line clear.
//! - Gravity starts at one tick per 600ms and speeds up on each level-up.

use tetrix_types::{LEVEL_THRESHOLD, POINTS_PER_LINE, TICK_LENGTH_FLOOR_MS, TICK_LENGTH_LEVEL_ONE_MS};

/// Points for clearing `lines` rows at `level`
pub fn points_for_lines(lines: usize, level: u32) -> u32 {
    (lines as u32)
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Cumulative score at which `level` is left
pub fn level_up_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_THRESHOLD)
}

/// Whether `score` has reached the threshold of `level`
pub fn should_level_up(score: u32, level: u32) -> bool {
    score >= level_up_threshold(level)
}

/// Tick interval after one level-up
///
/// Shortens by 100ms down to 100ms, then by 50ms down to the floor.
pub fn next_tick_interval_ms(current_ms: u32) -> u32 {
    if current_ms >= 200 {
        current_ms - 100
    } else if current_ms > TICK_LENGTH_FLOOR_MS {
        (current_ms - 50).max(TICK_LENGTH_FLOOR_MS)
    } else {
        current_ms
    }
}

/// Get the tick interval for a level (in milliseconds)
pub fn tick_interval_ms(level: u32) -> u32 {
    let mut interval = TICK_LENGTH_LEVEL_ONE_MS;
    for _ in 1..level.max(1) {
        let next = next_tick_interval_ms(interval);
        if next == interval {
            break;
        }
        interval = next;
    }
    interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_scale_with_level() {
        assert_eq!(points_for_lines(0, 1), 0);
        assert_eq!(points_for_lines(1, 1), 10);
        assert_eq!(points_for_lines(4, 1), 40);
        assert_eq!(points_for_lines(2, 3), 60);
    }

    #[test]
    fn test_level_threshold() {
        assert_eq!(level_up_threshold(1), 500);
        assert_eq!(level_up_threshold(4), 2000);
        assert!(!should_level_up(499, 1));
        assert!(should_level_up(500, 1));
        assert!(!should_level_up(999, 2));
    }

    #[test]
    fn test_tick_interval_steps() {
        assert_eq!(next_tick_interval_ms(600), 500);
        assert_eq!(next_tick_interval_ms(200), 100);
        assert_eq!(next_tick_interval_ms(100), 50);
        assert_eq!(next_tick_interval_ms(50), 50);
    }

    #[test]
    fn test_tick_interval_by_level() {
        assert_eq!(tick_interval_ms(0), 600);
        assert_eq!(tick_interval_ms(1), 600);
        assert_eq!(tick_interval_ms(2), 500);
        assert_eq!(tick_interval_ms(6), 100);
        assert_eq!(tick_interval_ms(7), 50);
        assert_eq!(tick_interval_ms(40), 50); // Floor at 50
    }
}
