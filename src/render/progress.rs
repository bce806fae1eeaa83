//! Boxed progress panel for the state.md frontmatter

use super::{percent, progress_bar};
use crate::models::{FieldValue, Frontmatter, SessionPhase};

/// Columns between the box borders
pub const INNER_WIDTH: usize = 63;

/// Default alignment-iteration budget shown while planning
pub const DEFAULT_MAX_ALIGN_ITERATIONS: i64 = 5;
/// Default retry budget shown while executing
pub const DEFAULT_MAX_RETRIES: i64 = 3;

/// Render the progress panel.
///
/// `task` is the task summary shown in the header.
pub fn render_progress(state: &Frontmatter, task: &str) -> String {
    let mut lines = vec![
        border('╔', '╗'),
        row(&format!("  AI-Collab: {:<50}", task)),
        border('╠', '╣'),
    ];

    match SessionPhase::from_value(state.get("phase")) {
        SessionPhase::Planning => {
            let plan_version = text_or(state, "plan_version", 0);
            let align = text_or(state, "align_iteration", 0);
            let max_align = text_or(state, "max_align_iterations", DEFAULT_MAX_ALIGN_ITERATIONS);

            lines.push(row("  Phase:     PLANNING"));
            lines.push(row(&format!("  Plan:      v{}", plan_version)));
            lines.push(row(&format!("  Alignment: {}/{} iterations", align, max_align)));
        }
        SessionPhase::Executing => {
            let current = state.int_or("current_step", 0);
            let total = state.int_or("total_steps", 0);
            let retry = text_or(state, "retry_count", 0);
            let max_retry = text_or(state, "max_retries", DEFAULT_MAX_RETRIES);

            let pct = percent(current, total).unwrap_or(0);
            let bar = progress_bar(pct);

            lines.push(row("  Phase:     EXECUTING"));
            lines.push(row(&format!("  Step:      {}/{}", current, total)));
            lines.push(row(&format!("  Progress:  {} {:>3}%", bar, pct)));
            lines.push(row(&format!("  Retries:   {}/{}", retry, max_retry)));
        }
        SessionPhase::Done => {
            lines.push(row("  Phase:     ✅ DONE"));
        }
        SessionPhase::Other => {}
    }

    lines.push(border('╚', '╝'));
    lines.join("\n")
}

fn text_or(state: &Frontmatter, key: &str, default: i64) -> String {
    match state.get(key) {
        Some(value) => value.to_string(),
        None => FieldValue::Integer(default).to_string(),
    }
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(INNER_WIDTH), right)
}

/// One boxed row, padded to the inner width (content that is too long overflows)
fn row(content: &str) -> String {
    let pad = INNER_WIDTH.saturating_sub(display_width(content));
    format!("║{}{}║", content, " ".repeat(pad))
}

/// Terminal columns, counting emoji as two
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| match c {
            '\u{2705}' | '\u{274C}' | '\u{1F300}'..='\u{1FAFF}' => 2,
            _ => 1,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(entries: Vec<(&str, FieldValue)>) -> Frontmatter {
        entries.into_iter().collect()
    }

    fn assert_boxed(out: &str) {
        for line in out.lines() {
            assert_eq!(display_width(line), INNER_WIDTH + 2, "line {:?}", line);
        }
    }

    #[test]
    fn test_executing_panel() {
        let fm = state(vec![
            ("phase", FieldValue::from("executing")),
            ("current_step", FieldValue::Integer(6)),
            ("total_steps", FieldValue::Integer(20)),
            ("retry_count", FieldValue::Integer(1)),
        ]);

        let out = render_progress(&fm, "Refactor parser");
        assert!(out.contains("AI-Collab: Refactor parser"));
        assert!(out.contains("Phase:     EXECUTING"));
        assert!(out.contains("Step:      6/20"));
        assert!(out.contains(&format!("Progress:  {}{}  30%", "█".repeat(6), "░".repeat(14))));
        assert!(out.contains("Retries:   1/3"));
        assert_boxed(&out);
    }

    #[test]
    fn test_executing_without_total() {
        let fm = state(vec![("phase", FieldValue::from("executing"))]);
        let out = render_progress(&fm, "");
        assert!(out.contains("Step:      0/0"));
        assert!(out.contains(&format!("{}   0%", "░".repeat(20))));
    }

    #[test]
    fn test_planning_panel() {
        let fm = state(vec![
            ("phase", FieldValue::from("planning")),
            ("plan_version", FieldValue::Integer(2)),
            ("align_iteration", FieldValue::Integer(1)),
        ]);

        let out = render_progress(&fm, "Task");
        assert!(out.contains("Phase:     PLANNING"));
        assert!(out.contains("Plan:      v2"));
        assert!(out.contains("Alignment: 1/5 iterations"));
        assert_boxed(&out);
    }

    #[test]
    fn test_done_panel() {
        let fm = state(vec![("phase", FieldValue::from("done"))]);
        let out = render_progress(&fm, "Task");
        assert!(out.contains("✅ DONE"));
        assert_boxed(&out);
    }

    #[test]
    fn test_unknown_phase_has_header_only() {
        let out = render_progress(&Frontmatter::new(), "Task");
        assert_eq!(out.lines().count(), 4);
        assert!(!out.contains("Phase:"));
        assert_boxed(&out);
    }
}
