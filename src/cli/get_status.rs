use crate::error::SessionError;
use crate::render::status::render_status;
use crate::session::{task, SessionDir, StatusStore};
use crate::Result;

/// Print the status banner, or `No active session` when status.json is absent
pub fn run(session: &SessionDir) -> Result<()> {
    let status_path = session.status_path();
    if !status_path.exists() {
        println!("{}", SessionError::NoActiveSession);
        return Ok(());
    }

    let store = StatusStore::load(status_path)?;
    let headline = task::headline(&session.task_path())?;

    println!("{}", render_status(store.record(), headline.as_deref()));
    Ok(())
}
