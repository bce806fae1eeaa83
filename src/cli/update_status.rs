//! update-status: mutate status.json

use super::assignments;
use crate::error::SessionError;
use crate::session::{SessionDir, StatusStore};
use crate::{Context, Result};
use clap::Args;

pub const USAGE: &str = "Usage: update-status <key>=<value> [<key>=<value> ...]";

#[derive(Args, Debug, Default)]
pub struct UpdateStatusArgs {
    /// Fields to set, as key=value
    #[arg(value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
}

/// Apply updates, save, and print the resulting record as pretty JSON.
///
/// status.json is created with defaults when it does not exist yet.
pub fn run(session: &SessionDir, args: UpdateStatusArgs) -> Result<()> {
    if args.assignments.is_empty() {
        return Err(SessionError::Usage(USAGE.to_string()).into());
    }

    let mut store = StatusStore::load(session.status_path())?;
    store.apply_updates(assignments(&args.assignments));
    store.save()?;

    let json = store
        .record()
        .to_pretty_json()
        .context("Failed to serialize status")?;
    println!("{}", json);
    Ok(())
}
