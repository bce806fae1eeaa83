//! StateStore - state.md frontmatter read/update/write

use crate::error::SessionError;
use crate::models::{FieldValue, StateDocument};
use crate::parser::frontmatter::{parse_document, serialize_document};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// State document store.
///
/// The document itself is created by the orchestrator; this store only
/// rewrites the frontmatter block and carries the body through unchanged.
pub struct StateStore {
    path: PathBuf,
    document: StateDocument,
}

impl StateStore {
    /// Load state.md, failing with `NoActiveSession` if it is absent
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(SessionError::NoActiveSession.into());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document = parse_document(&content);
        tracing::debug!(
            path = %path.display(),
            fields = document.frontmatter.len(),
            "loaded state document"
        );

        Ok(Self { path, document })
    }

    pub fn document(&self) -> &StateDocument {
        &self.document
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.document.frontmatter.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.document.frontmatter.iter()
    }

    /// Apply coerced `(key, raw)` updates in order; later keys win
    pub fn apply_updates<'a, I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, raw) in updates {
            let value = FieldValue::coerce(raw);
            tracing::debug!(key, ?value, "state update");
            self.document.frontmatter.insert(key, value);
        }
    }

    /// Rewrite state.md with the current frontmatter and original body
    pub fn save(&self) -> Result<()> {
        let content = serialize_document(&self.document.frontmatter, &self.document.body);
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved state document");
        Ok(())
    }
}
