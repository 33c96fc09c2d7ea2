//! invlint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use invlint::cli::{Cli, CommandDispatcher};
use invlint::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by `RUST_LOG`; the default only shows warnings.
/// Logs go to stderr so they never mix with the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("invlint=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("invlint starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let mut ui = TerminalUI::new();

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
