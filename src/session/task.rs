//! Task description summaries (task.md)

use anyhow::{Context, Result};
use std::path::Path;

/// Maximum characters shown from the task description
pub const SUMMARY_CHARS: usize = 50;

fn read_trimmed(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content.trim().to_string()))
}

/// First line of the task, at most 50 characters; `None` if absent or empty
pub fn headline(path: &Path) -> Result<Option<String>> {
    let Some(text) = read_trimmed(path)? else {
        return Ok(None);
    };

    let first = text.lines().next().unwrap_or_default();
    let headline: String = first.chars().take(SUMMARY_CHARS).collect();
    Ok((!headline.is_empty()).then_some(headline))
}

/// First 50 characters of the task with `...` appended when cut.
///
/// Line breaks are flattened to spaces so the summary fits on one row.
pub fn summary(path: &Path) -> Result<String> {
    let Some(text) = read_trimmed(path)? else {
        return Ok(String::new());
    };

    let mut summary: String = text
        .chars()
        .take(SUMMARY_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if text.chars().count() > SUMMARY_CHARS {
        summary.push_str("...");
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_task(temp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = temp.path().join("task.md");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_headline_first_line() {
        let temp = TempDir::new().unwrap();
        let path = write_task(&temp, "\n  Add OAuth login\nDetails follow\n");
        assert_eq!(headline(&path).unwrap().as_deref(), Some("Add OAuth login"));
    }

    #[test]
    fn test_headline_truncates() {
        let temp = TempDir::new().unwrap();
        let path = write_task(&temp, &"x".repeat(80));
        assert_eq!(headline(&path).unwrap().unwrap().len(), 50);
    }

    #[test]
    fn test_headline_missing_or_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(headline(&temp.path().join("task.md")).unwrap(), None);
        let path = write_task(&temp, "   \n");
        assert_eq!(headline(&path).unwrap(), None);
    }

    #[test]
    fn test_summary_ellipsis() {
        let temp = TempDir::new().unwrap();
        let path = write_task(&temp, &"é".repeat(60));
        let s = summary(&path).unwrap();
        assert_eq!(s.chars().count(), 53);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn test_summary_short_and_multiline() {
        let temp = TempDir::new().unwrap();
        let path = write_task(&temp, "Fix bug\nin parser\n");
        assert_eq!(summary(&path).unwrap(), "Fix bug in parser");
        assert_eq!(summary(&temp.path().join("missing.md")).unwrap(), "");
    }
}
