//! Text rendering for session reports
//!
//! - `status`: legacy `===` banner for status.json
//! - `progress`: boxed panel for the state.md frontmatter
//!
//! Renderers are pure: they return the report and leave printing to the CLI.

pub mod progress;
pub mod status;

/// Number of cells in the progress bar
pub const BAR_CELLS: i64 = 20;
pub const BAR_FILLED: char = '█';
pub const BAR_EMPTY: char = '░';

/// `floor(current / total * 100)`, or `None` when `total <= 0`
pub fn percent(current: i64, total: i64) -> Option<i64> {
    if total <= 0 {
        return None;
    }
    let pct = (i128::from(current) * 100).div_euclid(i128::from(total));
    Some(pct.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// Filled cell count for a percentage, one cell per 5%
pub fn filled_cells(pct: i64) -> i64 {
    pct.div_euclid(5).clamp(0, BAR_CELLS)
}

/// 20-cell block bar for a percentage
pub fn progress_bar(pct: i64) -> String {
    let filled = filled_cells(pct) as usize;
    let empty = BAR_CELLS as usize - filled;
    format!(
        "{}{}",
        BAR_FILLED.to_string().repeat(filled),
        BAR_EMPTY.to_string().repeat(empty)
    )
}
