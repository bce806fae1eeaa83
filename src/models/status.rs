//! Status record (`status.json`)

use super::value::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PHASE: &str = "phase";
pub const PLAN_VERSION: &str = "planVersion";
pub const CURRENT_STEP: &str = "currentStep";
pub const TOTAL_STEPS: &str = "totalSteps";
pub const STARTED_AT: &str = "startedAt";
pub const LAST_UPDATED: &str = "lastUpdated";

/// Phase value of a session that has not started
pub const IDLE_PHASE: &str = "idle";

/// JSON status record.
///
/// Stored as an ordered JSON object so unknown fields written by other tools
/// survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord {
    fields: Map<String, Value>,
}

impl Default for StatusRecord {
    fn default() -> Self {
        let mut fields = Map::new();
        fields.insert(PHASE.into(), Value::from(IDLE_PHASE));
        fields.insert(PLAN_VERSION.into(), Value::from(0));
        fields.insert(CURRENT_STEP.into(), Value::from(0));
        fields.insert(TOTAL_STEPS.into(), Value::from(0));
        fields.insert(STARTED_AT.into(), Value::Null);
        fields.insert(LAST_UPDATED.into(), Value::Null);
        Self { fields }
    }
}

impl StatusRecord {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value.to_json());
    }

    /// Apply coerced `(key, raw)` updates in order; later keys win
    pub fn apply_updates<'a, I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, raw) in updates {
            let value = FieldValue::coerce(raw);
            tracing::debug!(key, ?value, "status update");
            self.set(key, value);
        }
    }

    /// Current phase, `idle` when absent
    pub fn phase(&self) -> &str {
        self.fields
            .get(PHASE)
            .and_then(Value::as_str)
            .unwrap_or(IDLE_PHASE)
    }

    pub fn is_idle(&self) -> bool {
        match self.fields.get(PHASE) {
            Some(Value::String(s)) => s == IDLE_PHASE,
            _ => false,
        }
    }

    /// Integer counter; absent or non-integer values read as 0
    pub fn counter(&self, key: &str) -> i64 {
        self.fields.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Timestamp string, `None` when absent or null
    pub fn timestamp(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Stamp `lastUpdated`, and `startedAt` the first time the session leaves idle
    pub fn touch(&mut self, now: &str) {
        self.fields
            .insert(LAST_UPDATED.into(), Value::String(now.to_string()));

        let started = matches!(self.fields.get(STARTED_AT), Some(v) if !v.is_null());
        if !started && !self.is_idle() {
            self.fields
                .insert(STARTED_AT.into(), Value::String(now.to_string()));
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let record = StatusRecord::default();
        assert_eq!(record.phase(), "idle");
        assert_eq!(record.counter(PLAN_VERSION), 0);
        assert_eq!(record.counter(CURRENT_STEP), 0);
        assert_eq!(record.counter(TOTAL_STEPS), 0);
        assert_eq!(record.get(STARTED_AT), Some(&Value::Null));
        assert_eq!(record.get(LAST_UPDATED), Some(&Value::Null));
    }

    #[test]
    fn test_apply_updates_coerces_and_last_wins() {
        let mut record = StatusRecord::default();
        record.apply_updates(vec![
            ("phase", "planning"),
            ("currentStep", "2"),
            ("currentStep", "3"),
            ("approved", "true"),
        ]);

        assert_eq!(record.phase(), "planning");
        assert_eq!(record.get(CURRENT_STEP), Some(&Value::from(3)));
        assert_eq!(record.get("approved"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_touch_sets_started_once() {
        let mut record = StatusRecord::default();
        record.apply_updates(vec![("phase", "planning")]);
        record.touch("2024-01-01T00:00:00.000000");
        assert_eq!(record.timestamp(STARTED_AT), Some("2024-01-01T00:00:00.000000"));

        record.apply_updates(vec![("phase", "executing")]);
        record.touch("2024-01-02T00:00:00.000000");
        assert_eq!(record.timestamp(STARTED_AT), Some("2024-01-01T00:00:00.000000"));
        assert_eq!(record.timestamp(LAST_UPDATED), Some("2024-01-02T00:00:00.000000"));
    }

    #[test]
    fn test_touch_idle_leaves_started_unset() {
        let mut record = StatusRecord::default();
        record.touch("2024-01-01T00:00:00.000000");
        assert_eq!(record.get(STARTED_AT), Some(&Value::Null));
        assert!(record.timestamp(LAST_UPDATED).is_some());
    }

    #[test]
    fn test_counter_non_integer_reads_zero() {
        let mut record = StatusRecord::default();
        record.apply_updates(vec![("totalSteps", "lots")]);
        assert_eq!(record.counter(TOTAL_STEPS), 0);
    }

    #[test]
    fn test_pretty_json_keeps_order() {
        let record = StatusRecord::default();
        let json = record.to_pretty_json().unwrap();
        let phase_at = json.find("\"phase\"").unwrap();
        let updated_at = json.find("\"lastUpdated\"").unwrap();
        assert!(phase_at < updated_at);
        assert!(json.contains("\n  \"planVersion\": 0,"));
    }
}
