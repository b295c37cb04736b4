//! Scoring module - line clear points, drop points, and level progression
//!
//! Line clears pay `LINE_POINTS[lines] × level`, using the level in effect
//! before the clear is counted. Level is `lines / 10 + 1`.

use crate::types::{
    BASE_TICK_MS, HARD_DROP_POINT, LINES_PER_LEVEL, LINE_POINTS, MIN_TICK_MS, START_LEVEL,
};

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for the rows cleared.
    pub line_clear_score: u32,
    /// Cumulative lines after this clear.
    pub total_lines: u32,
    /// Level after this clear.
    pub level: u32,
}

/// Points for clearing `lines` rows (1-4) at `level`
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_POINTS.len() {
        return 0;
    }
    LINE_POINTS[lines].saturating_mul(level)
}

/// Points for a hard drop over `cells` rows
pub fn calculate_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINT)
}

/// Level for a cumulative line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Apply one sweep result to the running totals
pub fn calculate_score(lines: usize, level: u32, total_lines: u32) -> ScoreResult {
    let total_lines = total_lines.saturating_add(lines as u32);
    ScoreResult {
        line_clear_score: calculate_line_score(lines, level),
        total_lines,
        level: calculate_level(total_lines),
    }
}

/// Gravity tick interval for a level (milliseconds)
///
/// `max(100, 1000 / (level * 0.8 + 0.2))`, truncated to whole milliseconds.
pub fn tick_interval_ms(level: u32) -> u32 {
    let interval = BASE_TICK_MS / (level as f64 * 0.8 + 0.2);
    (interval as u32).max(MIN_TICK_MS)
}
