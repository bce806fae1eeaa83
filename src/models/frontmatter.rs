//! Frontmatter Types for the session state document
//!
//! Defines the in-memory shape of `state.md`:
//! - `Frontmatter`: flat, ordered key/value mapping
//! - `StateDocument`: frontmatter plus the untouched Markdown body

use super::value::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

// =============================================================================
// Frontmatter mapping
// =============================================================================

/// Flat, insertion-ordered frontmatter mapping.
///
/// Re-inserting an existing key replaces its value in place, so the key keeps
/// the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key (last write wins)
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Integer field with a fallback for absent or non-integer values
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(value) => value.as_i64().unwrap_or(0),
            None => default,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut fm = Frontmatter::new();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

impl Serialize for Frontmatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// State document
// =============================================================================

/// `state.md`: frontmatter block plus opaque body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDocument {
    /// Parsed frontmatter (empty when the document has no delimited block)
    pub frontmatter: Frontmatter,

    /// Everything after the frontmatter block, verbatim
    pub body: String,
}

impl StateDocument {
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }
}
