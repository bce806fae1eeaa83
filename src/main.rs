use ai_collab::cli::{self, get_status, show_progress, update_state, update_status};
use ai_collab::{Result, SessionDir};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ai-collab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI collaboration session status and state", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Session directory (default: ~/.ai-collab/session)
    #[arg(long, global = true, value_name = "DIR")]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status banner from status.json (same as get-status)
    Status,

    /// Show the progress panel from state.md (same as show-progress)
    Progress,

    /// Query or update state.md frontmatter (same as update-state)
    State(update_state::UpdateStateArgs),

    /// Update status.json fields (same as update-status)
    Update(update_status::UpdateStatusArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    ai_collab::logging::init_tracing();

    cli::report(run(cli))
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate(shell, &mut Cli::command(), "ai-collab", &mut io::stdout());
        return Ok(());
    }

    let session = match cli.session_dir {
        Some(dir) => SessionDir::at(dir),
        None => SessionDir::resolve()?,
    };

    match cli.command {
        Commands::Status => get_status::run(&session),
        Commands::Progress => show_progress::run(&session),
        Commands::State(args) => update_state::run(&session, args),
        Commands::Update(args) => update_status::run(&session, args),
        Commands::Completions { .. } => unreachable!("handled before session resolution"),
    }
}
