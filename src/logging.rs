/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`. Without it the seeder logs its own steps at
/// `info` and keeps sqlx's per-statement logging down to warnings; use
/// `RUST_LOG=quiz_seed=debug` to see every inserted row.
///
/// Events go to stderr so stdout only ever carries command output
/// (`check --json` in particular). Colours are used only on a terminal.
///
/// Call once, at the top of `main`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,sqlx=warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
