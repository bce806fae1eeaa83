//! Display phases of a session

use super::value::FieldValue;

/// Coarse session phase as read from the state frontmatter.
///
/// Only drives which fields the progress panel shows; transitions are never
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Planning,
    Executing,
    Done,
    /// Idle, absent, or anything unrecognised
    Other,
}

impl SessionPhase {
    pub fn from_value(value: Option<&FieldValue>) -> Self {
        match value.and_then(FieldValue::as_str) {
            Some("planning") => SessionPhase::Planning,
            Some("executing") => SessionPhase::Executing,
            Some("done") => SessionPhase::Done,
            _ => SessionPhase::Other,
        }
    }
}
