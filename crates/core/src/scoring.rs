//! Scoring module - center clears, side-board multipliers, and level speed
//!
//! Only the center board earns points. When it clears rows, each side board
//! gives up its own full rows and turns their count into a multiplier:
//!
//! `delta = base(center_rows) * multiplier(left_rows) * multiplier(right_rows)`

use std::time::Duration;

use crate::types::{
    BOARD_MULTIPLIERS, FALL_INTERVAL_STEP, FPS, INITIAL_FALL_INTERVAL, LINES_PER_LEVEL,
    LINE_SCORES, MIN_FALL_PERIOD_MS,
};

/// Score calculation result for one center clear
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreResult {
    /// Base points for the center rows.
    pub base_points: f64,
    pub left_multiplier: f64,
    pub right_multiplier: f64,
    pub total: f64,
}

/// Base points for rows cleared on the center board in one lock.
/// 0 rows score nothing; 4 or more rows score as 4.
pub fn line_clear_points(rows: usize) -> f64 {
    LINE_SCORES[rows.min(4)]
}

/// Multiplier contributed by a side board that gave up `rows` full rows
pub fn board_multiplier(rows: usize) -> f64 {
    BOARD_MULTIPLIERS[rows.min(4)]
}

/// Calculate the score delta for one center clear from the side-board multipliers
pub fn calculate_score(
    center_rows: usize,
    left_multiplier: f64,
    right_multiplier: f64,
) -> ScoreResult {
    let base_points = line_clear_points(center_rows);

    ScoreResult {
        base_points,
        left_multiplier,
        right_multiplier,
        total: base_points * left_multiplier * right_multiplier,
    }
}

/// Cumulative center lines needed to leave `level`
pub fn lines_for_next_level(level: u32) -> u32 {
    (level + 1) * LINES_PER_LEVEL
}

/// Fall interval (ticker units) for a level, floored at 0
pub fn fall_interval(level: u32) -> f64 {
    (INITIAL_FALL_INTERVAL - level as f64 * FALL_INTERVAL_STEP).max(0.0)
}

/// Real time between fall ticks for an interval.
///
/// One unit lasts `1 / FPS` seconds. Clamped to `MIN_FALL_PERIOD_MS` so a zero
/// interval still yields a usable timer period.
pub fn fall_period(interval: f64) -> Duration {
    let min = Duration::from_millis(MIN_FALL_PERIOD_MS);
    if !interval.is_finite() || interval <= 0.0 {
        return min;
    }
    Duration::from_secs_f64(interval / FPS as f64).max(min)
}
