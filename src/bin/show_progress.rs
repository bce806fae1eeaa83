use ai_collab::cli::{self, show_progress};
use ai_collab::SessionDir;
use clap::Parser;
use std::process::ExitCode;

/// Show collaboration progress as a boxed panel
#[derive(Parser)]
#[command(name = "show-progress", version)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();
    ai_collab::logging::init_tracing();

    cli::report(SessionDir::resolve().and_then(|session| show_progress::run(&session)))
}
