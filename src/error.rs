//! Domain errors that decide a command's exit status

use thiserror::Error;

/// Errors reported to the user as plain stdout messages rather than `Error:` lines
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,

    #[error("{0}")]
    Usage(String),

    #[error("Failed to parse status file: {0}")]
    MalformedStatus(String),
}

impl SessionError {
    /// Whether the message belongs on stdout (vs. a red `Error:` on stderr)
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SessionError::NoActiveSession | SessionError::Usage(_))
    }
}
