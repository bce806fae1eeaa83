// ai-collab - session state utilities for AI collaboration workflows
// Reads and writes the status/state files an orchestrator keeps under ~/.ai-collab/session

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::SessionError;
pub use models::{FieldValue, Frontmatter, StateDocument, StatusRecord};
pub use session::{SessionDir, StateStore, StatusStore};
