//! StatusStore - status.json load/update/save

use crate::error::SessionError;
use crate::models::StatusRecord;
use anyhow::{Context, Result};
use chrono::Local;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Current local time as ISO-8601 without offset, microsecond precision
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Status store for a single session
pub struct StatusStore {
    path: PathBuf,
    record: StatusRecord,
}

impl StatusStore {
    /// Load status.json, or start from defaults when it does not exist
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let record = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded status file");
            parse_record(&content)?
        } else {
            tracing::debug!(path = %path.display(), "status file absent, using defaults");
            StatusRecord::default()
        };

        Ok(Self { path, record })
    }

    /// Get current record (read-only)
    pub fn record(&self) -> &StatusRecord {
        &self.record
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply coerced `(key, raw)` updates in argument order
    pub fn apply_updates<'a, I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.record.apply_updates(updates);
    }

    /// Stamp timestamps and write status.json
    pub fn save(&mut self) -> Result<()> {
        self.save_at(&now_timestamp())
    }

    /// Save with an explicit timestamp
    pub fn save_at(&mut self, now: &str) -> Result<()> {
        self.record.touch(now);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = self
            .record
            .to_pretty_json()
            .context("Failed to serialize status.json")?;
        std::fs::write(&self.path, content).context("Failed to write status.json")?;

        tracing::debug!(path = %self.path.display(), "saved status file");
        Ok(())
    }
}

fn parse_record(content: &str) -> Result<StatusRecord> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| SessionError::MalformedStatus(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(StatusRecord::from_map(map)),
        other => Err(SessionError::MalformedStatus(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))
        .into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
