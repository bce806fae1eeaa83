//! update-state: query or mutate the state.md frontmatter

use super::assignments;
use crate::error::SessionError;
use crate::session::{SessionDir, StateStore};
use crate::{Context, Result};
use clap::Args;

pub const USAGE: &str = "Usage: update-state <key>=<value> [<key>=<value> ...]
       update-state --get <key>
       update-state --show [--json]";

#[derive(Args, Debug, Default)]
pub struct UpdateStateArgs {
    /// Print every frontmatter field as `key: value`
    #[arg(long, conflicts_with_all = ["get", "assignments"])]
    pub show: bool,

    /// With --show, print the frontmatter as a JSON object
    #[arg(long, requires = "show")]
    pub json: bool,

    /// Print one field (empty line if absent)
    #[arg(long, value_name = "KEY", conflicts_with = "assignments")]
    pub get: Option<String>,

    /// Fields to set, as key=value
    #[arg(value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
}

impl UpdateStateArgs {
    fn is_empty(&self) -> bool {
        !self.show && self.get.is_none() && self.assignments.is_empty()
    }
}

pub fn run(session: &SessionDir, args: UpdateStateArgs) -> Result<()> {
    if args.is_empty() {
        return Err(SessionError::Usage(USAGE.to_string()).into());
    }

    let mut store = StateStore::load(session.state_path())?;

    if args.show && args.json {
        let json = serde_json::to_string_pretty(&store.document().frontmatter)
            .context("Failed to serialize state")?;
        println!("{}", json);
        return Ok(());
    }

    if args.show {
        for (key, value) in store.entries() {
            println!("{}: {}", key, value);
        }
        return Ok(());
    }

    if let Some(key) = &args.get {
        let value = store.get(key).map(|v| v.to_string()).unwrap_or_default();
        println!("{}", value);
        return Ok(());
    }

    store.apply_updates(assignments(&args.assignments));
    store.save()?;

    println!("Updated: {}", args.assignments.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use tempfile::TempDir;

    fn session_with_state(content: &str) -> (TempDir, SessionDir) {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("state.md"), content).unwrap();
        let session = SessionDir::at(temp.path());
        (temp, session)
    }

    fn set(pairs: &[&str]) -> UpdateStateArgs {
        UpdateStateArgs {
            assignments: pairs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let (_temp, session) = session_with_state("---\nphase: planning\n---\n");
        let err = run(&session, UpdateStateArgs::default()).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::Usage(_))
        ));
    }

    #[test]
    fn test_missing_session_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let session = SessionDir::at(temp.path());

        let err = run(&session, set(&["foo=1"])).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::NoActiveSession)
        ));
        assert!(!session.state_path().exists());
    }

    #[test]
    fn test_updates_last_write_wins() {
        let (_temp, session) = session_with_state("---\nphase: planning\n---\n\nNotes\n");
        run(&session, set(&["a=1", "a=2", "ready=true"])).unwrap();

        let store = StateStore::load(session.state_path()).unwrap();
        assert_eq!(store.get("a"), Some(&FieldValue::Integer(2)));
        assert_eq!(store.get("ready"), Some(&FieldValue::Boolean(true)));
        assert_eq!(store.document().body, "Notes\n");
    }

    #[test]
    fn test_show_and_get_do_not_write() {
        let original = "---\nphase: planning\n---\nBody";
        let (_temp, session) = session_with_state(original);

        let show = UpdateStateArgs {
            show: true,
            ..Default::default()
        };
        run(&session, show).unwrap();

        let get = UpdateStateArgs {
            get: Some("missing".to_string()),
            ..Default::default()
        };
        run(&session, get).unwrap();

        assert_eq!(
            std::fs::read_to_string(session.state_path()).unwrap(),
            original
        );
    }
}
