use ai_collab::cli::{self, update_state};
use ai_collab::SessionDir;
use clap::Parser;
use std::process::ExitCode;

/// Update collaboration session state (frontmatter in state.md)
#[derive(Parser)]
#[command(name = "update-state", version)]
struct Cli {
    #[command(flatten)]
    args: update_state::UpdateStateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ai_collab::logging::init_tracing();

    cli::report(SessionDir::resolve().and_then(|session| update_state::run(&session, cli.args)))
}
