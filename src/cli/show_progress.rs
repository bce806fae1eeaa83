use crate::error::SessionError;
use crate::render::progress::render_progress;
use crate::session::{task, SessionDir, StateStore};
use crate::Result;

/// Print the progress panel, or `No active session` when state.md is absent
pub fn run(session: &SessionDir) -> Result<()> {
    let state_path = session.state_path();
    if !state_path.exists() {
        println!("{}", SessionError::NoActiveSession);
        return Ok(());
    }

    let store = StateStore::load(state_path)?;
    let summary = task::summary(&session.task_path())?;

    println!("{}", render_progress(&store.document().frontmatter, &summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_session_is_ok() {
        let temp = TempDir::new().unwrap();
        assert!(run(&SessionDir::at(temp.path())).is_ok());
    }

    #[test]
    fn test_renders_without_frontmatter() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("state.md"), "no block here").unwrap();
        assert!(run(&SessionDir::at(temp.path())).is_ok());
    }
}
