//! Diagnostic logging
//!
//! Reports go to stdout, so diagnostics are written to stderr and stay at
//! `warn` unless `AI_COLLAB_LOG` asks for more (e.g. `AI_COLLAB_LOG=debug`).

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "AI_COLLAB_LOG";

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
