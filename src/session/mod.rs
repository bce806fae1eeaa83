//! Session directory access
//!
//! Handles the files an orchestrator keeps for one collaboration session:
//! - `status.json` (JSON status record)
//! - `state.md` (frontmatter state document)
//! - `task.md` (free-form task description)
//!
//! No locking is done. Every write replaces the whole file, so concurrent
//! writers race and the last successful write wins.

mod state;
mod status;
pub mod task;

pub use state::StateStore;
pub use status::{now_timestamp, StatusStore};

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding all ai-collab data
pub const APP_DIR: &str = ".ai-collab";
/// Session subdirectory
pub const SESSION_DIR: &str = "session";

pub const STATUS_FILE: &str = "status.json";
pub const STATE_FILE: &str = "state.md";
pub const TASK_FILE: &str = "task.md";

/// Location of a session directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDir {
    root: PathBuf,
}

impl SessionDir {
    /// Resolve `~/.ai-collab/session`
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(Self::at(home.join(APP_DIR).join(SESSION_DIR)))
    }

    /// Use an explicit session directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn status_path(&self) -> PathBuf {
        self.root.join(STATUS_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    pub fn task_path(&self) -> PathBuf {
        self.root.join(TASK_FILE)
    }
}
