//! Status banner for status.json

use super::percent;
use crate::models::status::{
    CURRENT_STEP, LAST_UPDATED, PHASE, PLAN_VERSION, STARTED_AT, TOTAL_STEPS,
};
use crate::models::StatusRecord;
use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";

/// Render the `=== AI Collaboration Status ===` banner.
///
/// `task` is the task headline; `None` renders as `None`.
pub fn render_status(record: &StatusRecord, task: Option<&str>) -> String {
    let current = record.counter(CURRENT_STEP);
    let total = record.counter(TOTAL_STEPS);

    let progress = match percent(current, total) {
        Some(pct) => format!("{}/{} ({}%)", current, total, pct),
        None => NOT_AVAILABLE.to_string(),
    };

    let lines = [
        String::new(),
        "=== AI Collaboration Status ===".to_string(),
        format!("Phase:        {}", field_text(record, PHASE, "idle")),
        format!("Task:         {}", task.unwrap_or("None")),
        format!("Plan Version: v{}", field_text(record, PLAN_VERSION, "0")),
        format!("Progress:     {}", progress),
        format!("Started:      {}", field_text(record, STARTED_AT, NOT_AVAILABLE)),
        format!("Last Updated: {}", field_text(record, LAST_UPDATED, NOT_AVAILABLE)),
        "================================".to_string(),
        String::new(),
    ];
    lines.join("\n")
}

/// Field as display text; absent or null falls back to `default`
fn field_text(record: &StatusRecord, key: &str, default: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
