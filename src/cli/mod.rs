//! Command implementations shared by the standalone executables and `ai-collab`

pub mod get_status;
pub mod show_progress;
pub mod update_state;
pub mod update_status;

use crate::error::SessionError;
use crate::models::split_assignment;
use crate::Result;
use colored::Colorize;
use std::process::ExitCode;

/// Pair up `key=value` arguments, skipping any without `=`
pub fn assignments(args: &[String]) -> Vec<(&str, &str)> {
    args.iter()
        .filter_map(|arg| {
            let pair = split_assignment(arg);
            if pair.is_none() {
                tracing::warn!(arg = %arg, "ignoring argument without '='");
            }
            pair
        })
        .collect()
}

/// Turn a command result into the process exit status.
///
/// Usage and missing-session errors are printed plainly on stdout; anything
/// else is an `Error:` line on stderr. Every failure exits with 1.
pub fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SessionError>() {
                Some(err) if err.is_user_facing() => println!("{}", err),
                _ => eprintln!("{}", format!("Error: {:#}", e).red()),
            }
            ExitCode::FAILURE
        }
    }
}
