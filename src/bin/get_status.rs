use ai_collab::cli::{self, get_status};
use ai_collab::SessionDir;
use clap::Parser;
use std::process::ExitCode;

/// Show the collaboration session status
#[derive(Parser)]
#[command(name = "get-status", version)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();
    ai_collab::logging::init_tracing();

    cli::report(SessionDir::resolve().and_then(|session| get_status::run(&session)))
}
