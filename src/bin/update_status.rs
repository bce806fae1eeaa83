use ai_collab::cli::{self, update_status};
use ai_collab::SessionDir;
use clap::Parser;
use std::process::ExitCode;

/// Update collaboration session status (status.json)
#[derive(Parser)]
#[command(name = "update-status", version)]
struct Cli {
    #[command(flatten)]
    args: update_status::UpdateStatusArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ai_collab::logging::init_tracing();

    cli::report(SessionDir::resolve().and_then(|session| update_status::run(&session, cli.args)))
}
